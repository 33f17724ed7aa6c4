//! JSON request/response contract for the calculation endpoint
//!
//! transport-agnostic: an HTTP layer hands the raw body to
//! [`handle_calculate`] and writes the returned status and body back out

use log::{debug, warn};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::amortization::AmortizationResult;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::request::LoanRequest;

/// wire format of a calculation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateRequest {
    pub loan_amount: f64,
    /// percent per annum, e.g. 7.5
    pub interest_rate: f64,
    /// months
    pub loan_term: u32,
    pub payment_type: String,
    #[serde(default)]
    pub down_payment: Option<f64>,
}

impl CalculateRequest {
    /// validate and convert into a domain request
    pub fn into_loan_request(self) -> Result<LoanRequest> {
        let principal = decimal_field(self.loan_amount, "loanAmount")?;
        let rate = decimal_field(self.interest_rate, "interestRate")?;
        let payment_type = self.payment_type.parse()?;

        // a zero down payment means no down payment
        let down_payment = match self.down_payment {
            Some(amount) if amount != 0.0 => {
                Some(Money::from_decimal(decimal_field(amount, "downPayment")?))
            }
            _ => None,
        };

        LoanRequest::new(
            Money::from_decimal(principal),
            Rate::from_percentage(rate),
            self.loan_term,
            payment_type,
            down_payment,
        )
    }
}

/// wire format of a successful calculation response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CalculateResponse {
    pub monthly_payment: f64,
    pub total_payment: f64,
    pub total_interest: f64,
    pub schedule: Vec<ScheduleEntry>,
}

/// one month of the schedule on the wire
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduleEntry {
    pub month: u32,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub balance: f64,
}

impl CalculateResponse {
    pub fn from_result(result: &AmortizationResult) -> Result<Self> {
        let schedule = result
            .schedule
            .iter()
            .map(|line| {
                Ok(ScheduleEntry {
                    month: line.month,
                    payment: float_field(line.payment)?,
                    principal: float_field(line.principal_portion)?,
                    interest: float_field(line.interest_portion)?,
                    balance: float_field(line.balance_after)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            monthly_payment: float_field(result.monthly_payment)?,
            total_payment: float_field(result.total_payment)?,
            total_interest: float_field(result.total_interest)?,
            schedule,
        })
    }
}

/// error body returned for any failed request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// status code plus serialized body, ready for any transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// the single request/response operation: decode, validate, compute, encode
///
/// never panics; every failure becomes a structured error body
pub fn handle_calculate(body: &str) -> ApiResponse {
    match calculate(body) {
        Ok(response) => {
            debug!(
                "computed schedule: {} months, monthly payment {}",
                response.schedule.len(),
                response.monthly_payment
            );
            ApiResponse {
                status: 200,
                // CalculateResponse contains only plain numbers, serialization cannot fail
                body: serde_json::to_string(&response).unwrap_or_default(),
            }
        }
        Err(err) => {
            warn!("request rejected: {err}");
            let status = if err.is_client_error() { 400 } else { 500 };
            let body = serde_json::to_string(&ErrorBody {
                error: err.to_string(),
            })
            .unwrap_or_default();
            ApiResponse { status, body }
        }
    }
}

fn calculate(body: &str) -> Result<CalculateResponse> {
    let request: CalculateRequest =
        serde_json::from_str(body).map_err(|e| LoanError::MalformedRequest {
            message: e.to_string(),
        })?;

    let loan_request = request.into_loan_request()?;
    let result = AmortizationResult::generate(&loan_request)?;
    CalculateResponse::from_result(&result)
}

fn decimal_field(value: f64, field: &'static str) -> Result<Decimal> {
    Decimal::from_f64(value).ok_or(LoanError::InvalidNumber { field })
}

fn float_field(value: Money) -> Result<f64> {
    value
        .as_decimal()
        .to_f64()
        .ok_or_else(|| LoanError::CalculationError {
            message: format!("amount {value} not representable as a number"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_body(response: &ApiResponse) -> serde_json::Value {
        serde_json::from_str(&response.body).unwrap()
    }

    #[test]
    fn test_annuity_request_round_trip() {
        let body = r#"{
            "loanAmount": 1200000,
            "interestRate": 7.5,
            "loanTerm": 12,
            "paymentType": "annuity"
        }"#;

        let response = handle_calculate(body);
        assert!(response.is_success());

        let json = parse_body(&response);
        assert_eq!(json["schedule"].as_array().unwrap().len(), 12);
        let monthly = json["monthlyPayment"].as_f64().unwrap();
        assert!((monthly - 104_108.9).abs() < 1.0);

        // schedule entries carry the agreed field set
        let first = &json["schedule"][0];
        assert_eq!(first["month"], 1);
        for field in ["payment", "principal", "interest", "balance"] {
            assert!(first[field].is_number(), "missing field {field}");
        }
    }

    #[test]
    fn test_down_payment_applied() {
        let with_down = handle_calculate(
            r#"{"loanAmount": 1200000, "interestRate": 7.5, "loanTerm": 12,
                "paymentType": "annuity", "downPayment": 200000}"#,
        );
        let plain = handle_calculate(
            r#"{"loanAmount": 1000000, "interestRate": 7.5, "loanTerm": 12,
                "paymentType": "annuity"}"#,
        );

        assert!(with_down.is_success());
        assert_eq!(with_down.body, plain.body);
    }

    #[test]
    fn test_zero_down_payment_ignored() {
        let zero_down = handle_calculate(
            r#"{"loanAmount": 500000, "interestRate": 9, "loanTerm": 24,
                "paymentType": "differential", "downPayment": 0}"#,
        );
        let absent = handle_calculate(
            r#"{"loanAmount": 500000, "interestRate": 9, "loanTerm": 24,
                "paymentType": "differential"}"#,
        );

        assert!(zero_down.is_success());
        assert_eq!(zero_down.body, absent.body);
    }

    #[test]
    fn test_missing_field_rejected() {
        let response = handle_calculate(r#"{"interestRate": 7.5, "loanTerm": 12, "paymentType": "annuity"}"#);
        assert_eq!(response.status, 400);

        let json = parse_body(&response);
        assert!(json["error"].as_str().unwrap().contains("loanAmount"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let response = handle_calculate("not json at all");
        assert_eq!(response.status, 400);
        assert!(parse_body(&response)["error"].as_str().is_some());
    }

    #[test]
    fn test_unknown_payment_type_rejected() {
        let response = handle_calculate(
            r#"{"loanAmount": 100000, "interestRate": 5, "loanTerm": 12,
                "paymentType": "ballon"}"#,
        );
        assert_eq!(response.status, 400);

        let json = parse_body(&response);
        assert!(json["error"].as_str().unwrap().contains("ballon"));
    }

    #[test]
    fn test_excess_down_payment_rejected() {
        let response = handle_calculate(
            r#"{"loanAmount": 100000, "interestRate": 5, "loanTerm": 12,
                "paymentType": "annuity", "downPayment": 150000}"#,
        );
        assert_eq!(response.status, 400);

        let json = parse_body(&response);
        assert!(json["error"].as_str().unwrap().contains("down payment"));
    }

    #[test]
    fn test_huge_term_rejected() {
        // compounding a term this long would overflow Decimal; the handler
        // must answer 400, never panic
        let response = handle_calculate(
            r#"{"loanAmount": 1000000, "interestRate": 25, "loanTerm": 100000,
                "paymentType": "annuity"}"#,
        );
        assert_eq!(response.status, 400);

        let json = parse_body(&response);
        assert!(json["error"].as_str().unwrap().contains("term"));
    }

    #[test]
    fn test_zero_term_rejected() {
        let response = handle_calculate(
            r#"{"loanAmount": 100000, "interestRate": 5, "loanTerm": 0,
                "paymentType": "annuity"}"#,
        );
        assert_eq!(response.status, 400);

        let json = parse_body(&response);
        assert!(json["error"].as_str().unwrap().contains("term"));
    }

    #[test]
    fn test_zero_rate_succeeds() {
        let response = handle_calculate(
            r#"{"loanAmount": 120000, "interestRate": 0, "loanTerm": 12,
                "paymentType": "annuity"}"#,
        );
        assert!(response.is_success());

        let json = parse_body(&response);
        assert_eq!(json["monthlyPayment"].as_f64().unwrap(), 10_000.0);
        assert_eq!(json["totalInterest"].as_f64().unwrap(), 0.0);
    }
}
