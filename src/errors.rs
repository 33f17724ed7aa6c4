use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid loan amount: {amount} (must be positive and at most 10^15)")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid loan term: {months} months (must be between 1 and 1200)")]
    InvalidTerm {
        months: u32,
    },

    #[error("invalid interest rate: {rate} (must be between 0% and 1000%)")]
    InvalidRate {
        rate: Rate,
    },

    #[error("down payment {down_payment} must be less than loan amount {principal}")]
    DownPaymentTooLarge {
        down_payment: Money,
        principal: Money,
    },

    #[error("negative down payment: {down_payment}")]
    NegativeDownPayment {
        down_payment: Money,
    },

    #[error("unknown payment type: {value:?} (expected \"annuity\" or \"differential\")")]
    UnknownPaymentType {
        value: String,
    },

    #[error("invalid number in field {field}")]
    InvalidNumber {
        field: &'static str,
    },

    #[error("malformed request body: {message}")]
    MalformedRequest {
        message: String,
    },

    #[error("invalid program catalog: {message}")]
    InvalidCatalog {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl LoanError {
    /// true for errors caused by bad caller input, as opposed to
    /// a result that could not be represented
    pub fn is_client_error(&self) -> bool {
        !matches!(self, LoanError::CalculationError { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
