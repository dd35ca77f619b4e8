//! Wire types for the prediction service
//!
//! Categorical answers are re-encoded through exhaustive enums, so an
//! unknown label is a conversion error instead of a silent passthrough.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::form::{Draft, Field, Verdict};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Gender::Male),
            "Female" => Some(Gender::Female),
            _ => None,
        }
    }
}

/// The service expects single-letter marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Married {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl Married {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(Married::Yes),
            "No" => Some(Married::No),
            _ => None,
        }
    }
}

/// The service spells the negative class "Undergraduate"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Education {
    Graduate,
    #[serde(rename = "Undergraduate")]
    NotGraduate,
}

impl Education {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Graduate" => Some(Education::Graduate),
            "Not Graduate" => Some(Education::NotGraduate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SelfEmployed {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

impl SelfEmployed {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Yes" => Some(SelfEmployed::Yes),
            "No" => Some(SelfEmployed::No),
            _ => None,
        }
    }
}

/// Sent as the string digits the model was trained on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CreditHistory {
    #[serde(rename = "1")]
    Good,
    #[serde(rename = "0")]
    Poor,
}

impl CreditHistory {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "1" => Some(CreditHistory::Good),
            "0" => Some(CreditHistory::Poor),
            _ => None,
        }
    }
}

/// "Semiurban" on the form, "Semi Urban" on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PropertyArea {
    Urban,
    #[serde(rename = "Semi Urban")]
    Semiurban,
    Rural,
}

impl PropertyArea {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "Urban" => Some(PropertyArea::Urban),
            "Semiurban" => Some(PropertyArea::Semiurban),
            "Rural" => Some(PropertyArea::Rural),
            _ => None,
        }
    }
}

/// The JSON body for `POST /predict`, member names exactly as the service
/// declares them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanApplication {
    #[serde(rename = "Gender")]
    pub gender: Gender,
    #[serde(rename = "Married")]
    pub married: Married,
    #[serde(rename = "Dependents")]
    pub dependents: u32,
    #[serde(rename = "Education")]
    pub education: Education,
    #[serde(rename = "Self_Employed")]
    pub self_employed: SelfEmployed,
    #[serde(rename = "ApplicantIncome")]
    pub applicant_income: f64,
    #[serde(rename = "CoapplicantIncome")]
    pub coapplicant_income: f64,
    #[serde(rename = "LoanAmount")]
    pub loan_amount: f64,
    #[serde(rename = "Loan_Amount_Term")]
    pub loan_amount_term: f64,
    #[serde(rename = "Credit_History")]
    pub credit_history: CreditHistory,
    #[serde(rename = "Property_Area")]
    pub property_area: PropertyArea,
}

impl TryFrom<&Draft> for LoanApplication {
    type Error = anyhow::Error;

    fn try_from(draft: &Draft) -> Result<Self> {
        Ok(Self {
            gender: categorical(draft, Field::Gender, Gender::from_label)?,
            married: categorical(draft, Field::Married, Married::from_label)?,
            dependents: dependents(draft.get(Field::Dependents))?,
            education: categorical(draft, Field::Education, Education::from_label)?,
            self_employed: categorical(draft, Field::SelfEmployed, SelfEmployed::from_label)?,
            applicant_income: decimal(draft, Field::ApplicantIncome)?,
            coapplicant_income: decimal_or_zero(draft, Field::CoapplicantIncome)?,
            // The form collects the amount in thousands
            loan_amount: decimal(draft, Field::LoanAmount)? * 1000.0,
            loan_amount_term: decimal(draft, Field::LoanAmountTerm)?,
            credit_history: categorical(draft, Field::CreditHistory, CreditHistory::from_label)?,
            property_area: categorical(draft, Field::PropertyArea, PropertyArea::from_label)?,
        })
    }
}

fn categorical<T>(draft: &Draft, field: Field, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
    let value = draft.get(field);
    parse(value).ok_or_else(|| anyhow!("{}: unknown option {:?}", field.label(), value))
}

/// "3+" caps the count at the 3 the service accepts
fn dependents(value: &str) -> Result<u32> {
    match value {
        "0" => Ok(0),
        "1" => Ok(1),
        "2" => Ok(2),
        "3+" => Ok(3),
        other => Err(anyhow!("Number of Dependents: unknown option {:?}", other)),
    }
}

fn decimal(draft: &Draft, field: Field) -> Result<f64> {
    let value = draft.get(field).trim();
    value
        .parse::<f64>()
        .map_err(|_| anyhow!("{}: not a number: {:?}", field.label(), value))
}

/// A blank co-applicant income means there is no co-applicant
fn decimal_or_zero(draft: &Draft, field: Field) -> Result<f64> {
    if draft.is_blank(field) {
        return Ok(0.0);
    }
    decimal(draft, field)
}

/// Response body from `/predict`. `1` is the favorable class; anything
/// else is treated as elevated risk.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictionResponse {
    pub prediction: i64,
}

impl PredictionResponse {
    pub fn verdict(&self) -> Verdict {
        if self.prediction == 1 {
            Verdict::LowRisk
        } else {
            Verdict::ElevatedRisk
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> Draft {
        let mut draft = Draft::default();
        draft.set(Field::ApplicantIncome, "5000");
        draft.set(Field::CoapplicantIncome, "3000");
        draft.set(Field::LoanAmount, "150");
        draft.set(Field::LoanAmountTerm, "360");
        draft
    }

    #[test]
    fn test_conversion_of_valid_draft() {
        let application = LoanApplication::try_from(&valid_draft()).unwrap();
        assert_eq!(application.gender, Gender::Male);
        assert_eq!(application.married, Married::No);
        assert_eq!(application.dependents, 0);
        assert_eq!(application.applicant_income, 5000.0);
        assert_eq!(application.loan_amount, 150_000.0);
        assert_eq!(application.loan_amount_term, 360.0);
    }

    #[test]
    fn test_worked_example_transformation() {
        let mut draft = valid_draft();
        draft.set(Field::Married, "Yes");
        draft.set(Field::SelfEmployed, "No");
        draft.set(Field::Education, "Not Graduate");
        draft.set(Field::PropertyArea, "Semiurban");
        draft.set(Field::CoapplicantIncome, "");

        let application = LoanApplication::try_from(&draft).unwrap();
        let value = serde_json::to_value(&application).unwrap();

        assert_eq!(value["Married"], "Y");
        assert_eq!(value["Self_Employed"], "N");
        assert_eq!(value["Education"], "Undergraduate");
        assert_eq!(value["LoanAmount"], 150_000.0);
        assert_eq!(value["Property_Area"], "Semi Urban");
        assert_eq!(value["CoapplicantIncome"], 0.0);
    }

    #[test]
    fn test_serialized_member_names() {
        let application = LoanApplication::try_from(&valid_draft()).unwrap();
        let value = serde_json::to_value(&application).unwrap();
        let members = value.as_object().unwrap();

        let expected = [
            "Gender",
            "Married",
            "Dependents",
            "Education",
            "Self_Employed",
            "ApplicantIncome",
            "CoapplicantIncome",
            "LoanAmount",
            "Loan_Amount_Term",
            "Credit_History",
            "Property_Area",
        ];
        assert_eq!(members.len(), expected.len());
        for name in expected {
            assert!(members.contains_key(name), "missing member {name}");
        }
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let mut draft = valid_draft();
        draft.set(Field::PropertyArea, "Suburban");
        assert!(LoanApplication::try_from(&draft).is_err());

        let mut draft = valid_draft();
        draft.set(Field::Gender, "");
        assert!(LoanApplication::try_from(&draft).is_err());
    }

    #[test]
    fn test_dependents_three_plus_caps_at_three() {
        let mut draft = valid_draft();
        draft.set(Field::Dependents, "3+");
        let application = LoanApplication::try_from(&draft).unwrap();
        assert_eq!(application.dependents, 3);
    }

    #[test]
    fn test_prediction_verdict_mapping() {
        assert_eq!(PredictionResponse { prediction: 1 }.verdict(), Verdict::LowRisk);
        assert_eq!(PredictionResponse { prediction: 0 }.verdict(), Verdict::ElevatedRisk);
        assert_eq!(PredictionResponse { prediction: 7 }.verdict(), Verdict::ElevatedRisk);
        assert_eq!(PredictionResponse { prediction: -1 }.verdict(), Verdict::ElevatedRisk);
    }

    #[test]
    fn test_response_decoding() {
        let response: PredictionResponse = serde_json::from_str(r#"{"prediction": 1}"#).unwrap();
        assert_eq!(response.verdict(), Verdict::LowRisk);
    }
}
