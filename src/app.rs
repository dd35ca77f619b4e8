use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{DefaultTerminal, Frame};
use std::sync::mpsc;
use std::time::Duration;

use crate::api::{self, LoanApplication, SubmitOutcome};
use crate::config::Config;
use crate::form::{FormState, FormStep};
use crate::ui;

pub struct App {
    pub config: Config,
    pub form: FormState,
    pub should_quit: bool,
    /// Receiver for the in-flight submission, if any
    pending: Option<mpsc::Receiver<SubmitOutcome>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            form: FormState::new(),
            should_quit: false,
            pending: None,
        }
    }

    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            self.poll_submission();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Drain the submission channel without blocking the draw loop
    fn poll_submission(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(SubmitOutcome::Verdict(verdict)) => {
                self.form.finish_submit(verdict);
                self.pending = None;
            }
            Ok(SubmitOutcome::Error(message)) => {
                self.form.fail_submit(message);
                self.pending = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                self.form.fail_submit("submission worker died".to_string());
                self.pending = None;
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // Global quit
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.should_quit = true;
            return;
        }

        if self.form.show_result {
            self.handle_result_key(key);
        } else {
            self.handle_form_key(key);
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => self.form.reset(),
            KeyCode::Char('r') => self.form.review_details(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.form.step == FormStep::Personal {
                    self.should_quit = true;
                } else {
                    self.form.retreat();
                }
            }
            KeyCode::Down | KeyCode::Tab => self.form.focus_next(),
            KeyCode::Up | KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Left => self.form.cycle_option(-1),
            KeyCode::Right | KeyCode::Char(' ') => self.form.cycle_option(1),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                if self.form.step == FormStep::LoanDetails {
                    self.submit();
                } else {
                    self.form.advance();
                }
            }
            KeyCode::Char(c) => self.form.input_char(c),
            _ => {}
        }
    }

    /// Validate the whole draft and fire the request on a worker thread.
    /// `begin_submit` guards against re-entry while one is in flight.
    fn submit(&mut self) {
        if !self.form.begin_submit() {
            return;
        }
        match LoanApplication::try_from(&self.form.draft) {
            Ok(application) => {
                let base_url = self.config.api.base_url.clone();
                self.pending = Some(api::submit_async(base_url, application));
            }
            Err(e) => self.form.fail_submit(format!("{}", e)),
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        match (self.form.show_result, self.form.outcome) {
            (true, Some(verdict)) => ui::result_ui::render(frame, area, verdict),
            _ => ui::form_ui::render(frame, area, &self.form),
        }
    }
}
