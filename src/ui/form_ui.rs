//! Form card rendering

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::form::{Field, FieldKind, FormState, FormStep};

/// Render the application form card
pub fn render(frame: &mut Frame, area: Rect, state: &FormState) {
    // Centered card (70% width, 80% height)
    let card_width = (area.width as f32 * 0.7) as u16;
    let card_height = (area.height as f32 * 0.8) as u16;

    let card_x = (area.width.saturating_sub(card_width)) / 2;
    let card_y = (area.height.saturating_sub(card_height)) / 2;

    let card_area = Rect::new(card_x, card_y, card_width, card_height);

    frame.render_widget(Clear, card_area);

    let title = format!(
        " Credit Risk Assessment - Step {}/{} ",
        state.step.number(),
        FormStep::total_steps()
    );

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(card_area);
    frame.render_widget(block, card_area);

    let chunks = Layout::vertical([
        Constraint::Length(2), // subtitle
        Constraint::Length(3), // progress
        Constraint::Min(1),    // fields
        Constraint::Length(2), // notices
        Constraint::Length(1), // footer row
    ])
    .split(inner);

    let subtitle = Paragraph::new(vec![
        Line::from(Span::styled(
            "Complete the form to evaluate credit eligibility",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]);
    frame.render_widget(subtitle, chunks[0]);

    render_progress(frame, chunks[1], state.step);
    render_fields(frame, chunks[2], state);
    render_notices(frame, chunks[3], state);
    render_footer(frame, card_area, state);
}

fn render_progress(frame: &mut Frame, area: Rect, step: FormStep) {
    let percent = step.number() as usize * 100 / FormStep::total_steps() as usize;
    let width = area.width as usize;
    let filled = width * step.number() as usize / FormStep::total_steps() as usize;

    let counter = Line::from(vec![
        Span::styled(
            format!("Step {} of {}", step.number(), FormStep::total_steps()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}% complete", percent),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let bar = Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(Color::Cyan)),
        Span::styled(
            "░".repeat(width.saturating_sub(filled)),
            Style::default().fg(Color::DarkGray),
        ),
    ]);

    let mut titles = Vec::new();
    for s in FormStep::ALL {
        let reached = s.number() <= step.number();
        let style = if reached {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let marker = if reached { "● " } else { "○ " };
        titles.push(Span::styled(marker, style));
        titles.push(Span::styled(s.title(), style));
        titles.push(Span::raw("   "));
    }

    let progress = Paragraph::new(vec![counter, bar, Line::from(titles)]);
    frame.render_widget(progress, area);
}

fn render_fields(frame: &mut Frame, area: Rect, state: &FormState) {
    let mut lines = Vec::new();

    for (i, &field) in state.step.fields().iter().enumerate() {
        let focused = i == state.focused;
        let flagged = state.errors.is_flagged(field);

        let marker_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let label_style = if flagged {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled(if focused { "▸ " } else { "  " }, marker_style),
            Span::styled(format!("{:<34}", field.label()), label_style),
        ];
        spans.extend(value_spans(state, field, focused));
        lines.push(Line::from(spans));

        // One detail line per field: the error displaces the hint
        if flagged {
            lines.push(Line::from(Span::styled(
                "      This field is required",
                Style::default().fg(Color::Red),
            )));
        } else if let Some(hint) = field.hint() {
            lines.push(Line::from(Span::styled(
                format!("      {}", hint),
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            lines.push(Line::from(""));
        }
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn value_spans(state: &FormState, field: Field, focused: bool) -> Vec<Span<'static>> {
    let value = state.draft.get(field);
    let value_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    match field.kind() {
        FieldKind::Select => {
            let label = field
                .options()
                .iter()
                .find(|(v, _)| *v == value)
                .map(|(_, label)| *label)
                .unwrap_or("(select)");

            if focused {
                vec![
                    Span::styled("◂ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(label.to_string(), value_style),
                    Span::styled(" ▸", Style::default().fg(Color::DarkGray)),
                ]
            } else {
                vec![Span::styled(label.to_string(), value_style)]
            }
        }
        FieldKind::Decimal => {
            if focused {
                vec![Span::styled(format!("{}█", value), value_style)]
            } else {
                vec![Span::styled(value.to_string(), value_style)]
            }
        }
    }
}

fn render_notices(frame: &mut Frame, area: Rect, state: &FormState) {
    let lines = if state.loading {
        vec![Line::from(Span::styled(
            "Contacting prediction service...",
            Style::default().fg(Color::Yellow),
        ))]
    } else if let Some(error) = &state.submit_error {
        vec![
            Line::from(Span::styled(
                "Could not get a prediction - try again",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::DarkGray),
            )),
        ]
    } else {
        Vec::new()
    };

    if !lines.is_empty() {
        frame.render_widget(Paragraph::new(lines), area);
    }
}

fn render_footer(frame: &mut Frame, card_area: Rect, state: &FormState) {
    let footer_area = Rect::new(
        card_area.x + 1,
        card_area.y + card_area.height.saturating_sub(2),
        card_area.width.saturating_sub(2),
        1,
    );

    let nav_text = if state.loading {
        "Calculating..."
    } else {
        match state.step {
            FormStep::Personal => "[↑/↓] Field  [←/→] Option  [Enter] Continue →  [Esc] Quit",
            FormStep::Financial => "[↑/↓] Field  [←/→] Option  [Enter] Continue →  [Esc] Back",
            FormStep::LoanDetails => "[↑/↓] Field  [←/→] Option  [Enter] Calculate Risk  [Esc] Back",
        }
    };

    let footer = Paragraph::new(nav_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, footer_area);
}
