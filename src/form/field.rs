//! Typed field identifiers and per-field validation flags

/// The eleven application fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Gender,
    Married,
    Dependents,
    Education,
    SelfEmployed,
    ApplicantIncome,
    CoapplicantIncome,
    CreditHistory,
    LoanAmount,
    LoanAmountTerm,
    PropertyArea,
}

/// How a field is edited and validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Cycled through a fixed option list
    Select,
    /// Free-form decimal input
    Decimal,
}

impl Field {
    pub const COUNT: usize = 11;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Gender,
        Field::Married,
        Field::Dependents,
        Field::Education,
        Field::SelfEmployed,
        Field::ApplicantIncome,
        Field::CoapplicantIncome,
        Field::CreditHistory,
        Field::LoanAmount,
        Field::LoanAmountTerm,
        Field::PropertyArea,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::ApplicantIncome
            | Field::CoapplicantIncome
            | Field::LoanAmount => FieldKind::Decimal,
            _ => FieldKind::Select,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Gender => "Gender",
            Field::Married => "Marital Status",
            Field::Dependents => "Number of Dependents",
            Field::Education => "Education Level",
            Field::SelfEmployed => "Employment Status",
            Field::ApplicantIncome => "Applicant Monthly Income (USD)",
            Field::CoapplicantIncome => "Co-applicant Monthly Income (USD)",
            Field::CreditHistory => "Credit History",
            Field::LoanAmount => "Loan Amount (in thousands)",
            Field::LoanAmountTerm => "Loan Term (months)",
            Field::PropertyArea => "Property Location",
        }
    }

    /// Value stored in a freshly created draft. Text inputs and the loan
    /// term start blank and must be filled in before submission.
    pub fn default_value(&self) -> &'static str {
        match self {
            Field::Gender => "Male",
            Field::Married => "No",
            Field::Dependents => "0",
            Field::Education => "Graduate",
            Field::SelfEmployed => "No",
            Field::ApplicantIncome => "",
            Field::CoapplicantIncome => "",
            Field::CreditHistory => "1",
            Field::LoanAmount => "",
            Field::LoanAmountTerm => "",
            Field::PropertyArea => "Urban",
        }
    }

    /// (stored value, display label) pairs for select fields. Decimal
    /// fields have no options.
    pub fn options(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Field::Gender => &[("Male", "Male"), ("Female", "Female")],
            Field::Married => &[("Yes", "Married"), ("No", "Single")],
            Field::Dependents => &[("0", "0"), ("1", "1"), ("2", "2"), ("3+", "3+")],
            Field::Education => &[
                ("Graduate", "Graduate"),
                ("Not Graduate", "Not Graduate"),
            ],
            Field::SelfEmployed => &[("Yes", "Self-employed"), ("No", "Employed")],
            Field::CreditHistory => &[
                ("1", "Good - meets guidelines"),
                ("0", "Poor - does not meet guidelines"),
            ],
            Field::LoanAmountTerm => &[
                ("360", "360 months (30 years)"),
                ("240", "240 months (20 years)"),
                ("180", "180 months (15 years)"),
                ("120", "120 months (10 years)"),
            ],
            Field::PropertyArea => &[
                ("Urban", "Urban"),
                ("Semiurban", "Semiurban"),
                ("Rural", "Rural"),
            ],
            Field::ApplicantIncome
            | Field::CoapplicantIncome
            | Field::LoanAmount => &[],
        }
    }

    /// Helper text shown under the field while it carries no error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Field::ApplicantIncome => Some("Total monthly income before taxes, e.g. 5000"),
            Field::CoapplicantIncome => Some("Enter 0 if there is no co-applicant"),
            Field::CreditHistory => Some("Based on previous credit performance"),
            Field::LoanAmount => Some("In thousands, e.g. 150 for $150,000"),
            _ => None,
        }
    }
}

/// Per-field "missing" flags. A validation pass replaces the whole set;
/// editing a field clears only its own flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldErrors {
    flags: [bool; Field::COUNT],
}

impl FieldErrors {
    pub fn flag(&mut self, field: Field) {
        self.flags[field.index()] = true;
    }

    pub fn clear(&mut self, field: Field) {
        self.flags[field.index()] = false;
    }

    pub fn is_flagged(&self, field: Field) -> bool {
        self.flags[field.index()]
    }

    pub fn any(&self) -> bool {
        self.flags.iter().any(|f| *f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_index_matches_declaration_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_select_fields_have_options() {
        for field in Field::ALL {
            match field.kind() {
                FieldKind::Select => assert!(!field.options().is_empty(), "{:?}", field),
                FieldKind::Decimal => assert!(field.options().is_empty(), "{:?}", field),
            }
        }
    }

    #[test]
    fn test_select_defaults_are_valid_options_or_blank() {
        for field in Field::ALL {
            let default = field.default_value();
            if field.kind() == FieldKind::Select && !default.is_empty() {
                assert!(
                    field.options().iter().any(|(value, _)| *value == default),
                    "{:?} default {:?} not in options",
                    field,
                    default
                );
            }
        }
    }

    #[test]
    fn test_error_flags() {
        let mut errors = FieldErrors::default();
        assert!(!errors.any());

        errors.flag(Field::LoanAmount);
        assert!(errors.is_flagged(Field::LoanAmount));
        assert!(!errors.is_flagged(Field::Gender));
        assert!(errors.any());

        errors.clear(Field::LoanAmount);
        assert!(!errors.any());
    }
}
