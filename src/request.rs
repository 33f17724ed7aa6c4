use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::types::PaymentType;

/// longest accepted term: 100 years
pub const MAX_TERM_MONTHS: u32 = 1200;

// every downstream Decimal computation stays in range inside these bounds
const MAX_RATE_PERCENT: Decimal = dec!(1000);
const MAX_PRINCIPAL: Decimal = dec!(1000000000000000);

/// validated loan request
///
/// constructed once per calculation; all fields are checked up front so the
/// calculator never sees a degenerate input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRequest {
    pub principal: Money,
    pub annual_rate: Rate,
    pub term_months: u32,
    pub payment_type: PaymentType,
    pub down_payment: Option<Money>,
}

impl LoanRequest {
    pub fn new(
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
        payment_type: PaymentType,
        down_payment: Option<Money>,
    ) -> Result<Self> {
        let request = Self {
            principal,
            annual_rate,
            term_months,
            payment_type,
            down_payment,
        };
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<()> {
        if self.principal <= Money::ZERO || self.principal.as_decimal() > MAX_PRINCIPAL {
            return Err(LoanError::InvalidPrincipal {
                amount: self.principal,
            });
        }

        if self.term_months == 0 || self.term_months > MAX_TERM_MONTHS {
            return Err(LoanError::InvalidTerm {
                months: self.term_months,
            });
        }

        if self.annual_rate.is_negative() || self.annual_rate.as_percentage() > MAX_RATE_PERCENT {
            return Err(LoanError::InvalidRate {
                rate: self.annual_rate,
            });
        }

        if let Some(down_payment) = self.down_payment {
            if down_payment < Money::ZERO {
                return Err(LoanError::NegativeDownPayment { down_payment });
            }
            // a down payment covering the whole amount leaves nothing to amortize
            if down_payment >= self.principal {
                return Err(LoanError::DownPaymentTooLarge {
                    down_payment,
                    principal: self.principal,
                });
            }
        }

        Ok(())
    }

    /// principal actually financed, after the down payment
    pub fn effective_principal(&self) -> Money {
        match self.down_payment {
            Some(down_payment) => self.principal - down_payment,
            None => self.principal,
        }
    }
}
