use serde::{Deserialize, Serialize};

use crate::row::Outcome;

/// Outcome counts for one cleaning call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanReport {
    pub rows: usize,
    pub valid: usize,
    pub invalid: usize,
    pub null: usize,
    pub not_personal: usize,
}

impl CleanReport {
    pub fn from_outcomes(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        let mut report = Self::default();
        for outcome in outcomes {
            report.record(outcome);
        }
        report
    }

    pub fn record(&mut self, outcome: Outcome) {
        self.rows += 1;
        match outcome {
            Outcome::Valid => self.valid += 1,
            Outcome::Invalid => self.invalid += 1,
            Outcome::Null => self.null += 1,
            Outcome::NotPersonal => self.not_personal += 1,
        }
    }

    pub fn has_invalid(&self) -> bool {
        self.invalid > 0
    }
}
