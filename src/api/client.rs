//! Prediction submission over HTTP
//!
//! Provides a blocking call for worker threads plus a non-blocking
//! wrapper that reports back over an mpsc channel drained by the event
//! loop.

use std::sync::mpsc;
use std::thread;

use anyhow::{anyhow, Result};

use super::payload::{LoanApplication, PredictionResponse};
use crate::form::Verdict;

/// Result of a submission attempt
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// The service answered with a classification
    Verdict(Verdict),
    /// Transport failure or non-success status, as a display string
    Error(String),
}

/// Submit an application synchronously (blocking)
///
/// This should be called from a background thread.
pub fn submit_sync(base_url: &str, application: &LoanApplication) -> Result<Verdict> {
    let url = format!("{}/predict", base_url.trim_end_matches('/'));
    let client = reqwest::blocking::Client::builder().build()?;

    let response = client.post(&url).json(application).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("prediction service returned {}", status));
    }

    let body: PredictionResponse = response.json()?;
    Ok(body.verdict())
}

/// Start an async submission
///
/// Returns a receiver that will receive the outcome when the request
/// completes or fails.
pub fn submit_async(base_url: String, application: LoanApplication) -> mpsc::Receiver<SubmitOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = match submit_sync(&base_url, &application) {
            Ok(verdict) => SubmitOutcome::Verdict(verdict),
            Err(e) => SubmitOutcome::Error(format!("{}", e)),
        };
        let _ = tx.send(outcome);
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::{Draft, Field};

    #[test]
    fn test_submit_failure_reports_over_channel() {
        let mut draft = Draft::default();
        draft.set(Field::ApplicantIncome, "5000");
        draft.set(Field::CoapplicantIncome, "0");
        draft.set(Field::LoanAmount, "150");
        draft.set(Field::LoanAmountTerm, "360");
        let application = LoanApplication::try_from(&draft).unwrap();

        // Nothing answers HTTP on the discard port
        let rx = submit_async("http://127.0.0.1:9".to_string(), application);
        match rx.recv().unwrap() {
            SubmitOutcome::Error(msg) => assert!(!msg.is_empty()),
            SubmitOutcome::Verdict(v) => panic!("unexpected verdict {:?}", v),
        }
    }
}
