//! The in-progress application draft

use super::field::Field;

/// The not-yet-submitted set of form answers. Every value is kept as text
/// until payload conversion, including the numeric inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    values: [String; Field::COUNT],
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            values: Field::ALL.map(|field| field.default_value().to_string()),
        }
    }
}

impl Draft {
    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Whitespace-only text counts as blank
    pub fn is_blank(&self, field: Field) -> bool {
        self.get(field).trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults() {
        let draft = Draft::default();
        assert_eq!(draft.get(Field::Gender), "Male");
        assert_eq!(draft.get(Field::Married), "No");
        assert_eq!(draft.get(Field::CreditHistory), "1");
        assert_eq!(draft.get(Field::ApplicantIncome), "");
        assert_eq!(draft.get(Field::LoanAmountTerm), "");
    }

    #[test]
    fn test_whitespace_is_blank() {
        let mut draft = Draft::default();
        draft.set(Field::LoanAmount, "   ");
        assert!(draft.is_blank(Field::LoanAmount));

        draft.set(Field::LoanAmount, "150");
        assert!(!draft.is_blank(Field::LoanAmount));
    }
}
