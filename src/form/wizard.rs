//! Form wizard state and logic

use super::draft::Draft;
use super::field::{Field, FieldErrors, FieldKind};

/// Form step enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormStep {
    #[default]
    Personal,
    Financial,
    LoanDetails,
}

impl FormStep {
    pub const ALL: [FormStep; 3] = [
        FormStep::Personal,
        FormStep::Financial,
        FormStep::LoanDetails,
    ];

    pub fn next(&self) -> Self {
        match self {
            FormStep::Personal => FormStep::Financial,
            FormStep::Financial => FormStep::LoanDetails,
            FormStep::LoanDetails => FormStep::LoanDetails,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormStep::Personal => FormStep::Personal,
            FormStep::Financial => FormStep::Personal,
            FormStep::LoanDetails => FormStep::Financial,
        }
    }

    pub fn number(&self) -> u8 {
        match self {
            FormStep::Personal => 1,
            FormStep::Financial => 2,
            FormStep::LoanDetails => 3,
        }
    }

    pub fn total_steps() -> u8 {
        3
    }

    pub fn title(&self) -> &'static str {
        match self {
            FormStep::Personal => "Personal",
            FormStep::Financial => "Financial",
            FormStep::LoanDetails => "Loan Details",
        }
    }

    /// Required fields for this step, in display order. Validation walks
    /// this table instead of hard-coding per-step conditionals.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            FormStep::Personal => &[
                Field::Gender,
                Field::Married,
                Field::Dependents,
                Field::Education,
                Field::SelfEmployed,
            ],
            FormStep::Financial => &[
                Field::ApplicantIncome,
                Field::CoapplicantIncome,
                Field::CreditHistory,
            ],
            FormStep::LoanDetails => &[
                Field::LoanAmount,
                Field::LoanAmountTerm,
                Field::PropertyArea,
            ],
        }
    }
}

/// Binary risk classification returned by the prediction service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LowRisk,
    ElevatedRisk,
}

/// Form wizard runtime state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub step: FormStep,
    pub draft: Draft,
    pub errors: FieldErrors,

    /// Index into `step.fields()` of the focused field
    pub focused: usize,

    pub outcome: Option<Verdict>,
    pub show_result: bool,
    pub loading: bool,
    pub submit_error: Option<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_field(&self) -> Field {
        let fields = self.step.fields();
        fields[self.focused.min(fields.len() - 1)]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % self.step.fields().len();
    }

    pub fn focus_prev(&mut self) {
        let len = self.step.fields().len();
        self.focused = (self.focused + len - 1) % len;
    }

    /// Update the draft; a pending error flag on the field is cleared, all
    /// other flags are left alone.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.draft.set(field, value);
        self.errors.clear(field);
    }

    /// Cycle the focused select field by `delta` through its option list.
    /// A blank value (the loan term starts that way) lands on the first
    /// option regardless of direction.
    pub fn cycle_option(&mut self, delta: isize) {
        let field = self.focused_field();
        let options = field.options();
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|(value, _)| *value == self.draft.get(field));
        let next = match current {
            Some(i) => (i as isize + delta).rem_euclid(options.len() as isize) as usize,
            None => 0,
        };
        self.set_field(field, options[next].0);
    }

    /// Append a character to the focused decimal field. Input is filtered
    /// to digits plus at most one decimal point, which keeps every
    /// validated draft convertible to a payload.
    pub fn input_char(&mut self, c: char) {
        let field = self.focused_field();
        if field.kind() != FieldKind::Decimal {
            return;
        }
        let accept = c.is_ascii_digit() || (c == '.' && !self.draft.get(field).contains('.'));
        if !accept {
            return;
        }
        let mut value = self.draft.get(field).to_string();
        value.push(c);
        self.set_field(field, value);
    }

    pub fn backspace(&mut self) {
        let field = self.focused_field();
        if field.kind() != FieldKind::Decimal {
            return;
        }
        let mut value = self.draft.get(field).to_string();
        value.pop();
        self.set_field(field, value);
    }

    /// Flag every blank field in the step's group, replacing the previous
    /// validation result. Returns whether the step is clean.
    pub fn validate_step(&mut self, step: FormStep) -> bool {
        let mut errors = FieldErrors::default();
        for &field in step.fields() {
            if self.draft.is_blank(field) {
                errors.flag(field);
            }
        }
        let clean = !errors.any();
        self.errors = errors;
        clean
    }

    /// Validate the current step and move forward only if clean
    pub fn advance(&mut self) {
        if !self.validate_step(self.step) {
            return;
        }
        let next = self.step.next();
        if next != self.step {
            self.step = next;
            self.focused = 0;
        }
    }

    /// Move back unconditionally; reverse navigation is never validated
    pub fn retreat(&mut self) {
        let prev = self.step.prev();
        if prev != self.step {
            self.step = prev;
            self.focused = 0;
        }
    }

    /// Re-validate all steps in order. On the first dirty step the wizard
    /// jumps there and that step's validation result stays visible. When
    /// the whole draft is clean the loading flag is raised and the caller
    /// owns firing the request. Returns false while a submission is
    /// already in flight, so at most one request can be pending.
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        for step in FormStep::ALL {
            if !self.validate_step(step) {
                self.step = step;
                self.focused = 0;
                return false;
            }
        }
        self.loading = true;
        self.submit_error = None;
        true
    }

    pub fn finish_submit(&mut self, verdict: Verdict) {
        self.loading = false;
        self.outcome = Some(verdict);
        self.show_result = true;
    }

    /// A failed submission leaves the draft and step untouched so the user
    /// can retry.
    pub fn fail_submit(&mut self, message: String) {
        self.loading = false;
        self.submit_error = Some(message);
    }

    /// Back to the form with the draft intact. The stored verdict only
    /// ever reflects the submission that produced it, so it is discarded.
    pub fn review_details(&mut self) {
        self.show_result = false;
        self.outcome = None;
    }

    /// Restore the initial mount state: defaults, step 1, no errors, no
    /// result.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
