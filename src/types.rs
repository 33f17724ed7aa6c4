use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::LoanError;

/// payment plan for a loan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// equal total payment every month; interest portion shrinks over time
    Annuity,
    /// equal principal portion every month; total payment shrinks over time
    Differential,
}

impl FromStr for PaymentType {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("annuity") {
            Ok(PaymentType::Annuity)
        } else if s.eq_ignore_ascii_case("differential") {
            Ok(PaymentType::Differential)
        } else {
            Err(LoanError::UnknownPaymentType {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::Annuity => write!(f, "annuity"),
            PaymentType::Differential => write!(f, "differential"),
        }
    }
}

/// lending program category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramKind {
    Standard,
    Family,
    It,
    Government,
}

/// inclusive range of allowed loan terms, in months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermRange {
    pub min_months: u32,
    pub max_months: u32,
}

impl TermRange {
    pub fn new(min_months: u32, max_months: u32) -> Self {
        Self {
            min_months,
            max_months,
        }
    }

    pub fn contains(&self, months: u32) -> bool {
        months >= self.min_months && months <= self.max_months
    }
}
