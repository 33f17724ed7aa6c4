use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::request::LoanRequest;
use crate::types::PaymentType;

/// single month in an amortization schedule
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentLine {
    pub month: u32,
    pub payment: Money,
    pub principal_portion: Money,
    pub interest_portion: Money,
    pub balance_after: Money,
}

/// full amortization schedule plus summary totals
#[derive(Debug, Clone, PartialEq)]
pub struct AmortizationResult {
    /// first month's payment; constant for annuity, representative only
    /// for differential
    pub monthly_payment: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub schedule: Vec<PaymentLine>,
}

impl AmortizationResult {
    /// compute the schedule for a validated request
    pub fn generate(request: &LoanRequest) -> Result<Self> {
        let calculator = AmortizationCalculator::new(request.payment_type);

        let schedule = calculator.calculate_schedule(
            request.effective_principal(),
            request.annual_rate,
            request.term_months,
        )?;

        let total_interest = schedule
            .iter()
            .map(|line| line.interest_portion)
            .fold(Money::ZERO, |acc, x| acc + x);

        let total_payment = schedule
            .iter()
            .map(|line| line.payment)
            .fold(Money::ZERO, |acc, x| acc + x);

        let monthly_payment = schedule
            .first()
            .map(|line| line.payment)
            .unwrap_or(Money::ZERO);

        Ok(Self {
            monthly_payment,
            total_payment,
            total_interest,
            schedule,
        })
    }

    /// get the line for a specific month (1-based)
    pub fn line(&self, month: u32) -> Option<&PaymentLine> {
        self.schedule.get(month.checked_sub(1)? as usize)
    }

    /// total interest paid over the principal
    pub fn overpayment(&self) -> Money {
        self.total_interest
    }

    pub fn len(&self) -> usize {
        self.schedule.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedule.is_empty()
    }
}

/// amortization calculator
pub struct AmortizationCalculator {
    payment_type: PaymentType,
}

impl AmortizationCalculator {
    pub fn new(payment_type: PaymentType) -> Self {
        Self { payment_type }
    }

    /// calculate full amortization schedule
    pub fn calculate_schedule(
        &self,
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Result<Vec<PaymentLine>> {
        match self.payment_type {
            PaymentType::Annuity => self.calculate_annuity(principal, annual_rate, term_months),
            PaymentType::Differential => {
                self.calculate_differential(principal, annual_rate, term_months)
            }
        }
    }

    /// annuity: constant total payment, interest on the running balance
    fn calculate_annuity(
        &self,
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Result<Vec<PaymentLine>> {
        let monthly_rate = annual_rate.monthly_rate();
        let payment = annuity_monthly_payment(principal, annual_rate, term_months)?;

        let mut schedule = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for month in 1..=term_months {
            let interest_portion = balance * monthly_rate.as_decimal();
            let principal_portion = payment - interest_portion;
            balance -= principal_portion;
            let balance_after = balance.max(Money::ZERO);

            schedule.push(PaymentLine {
                month,
                payment,
                principal_portion,
                interest_portion,
                balance_after,
            });
        }

        Ok(schedule)
    }

    /// differential: constant principal portion, each month priced independently
    fn calculate_differential(
        &self,
        principal: Money,
        annual_rate: Rate,
        term_months: u32,
    ) -> Result<Vec<PaymentLine>> {
        let principal_portion = principal / Decimal::from(term_months);

        let mut schedule = Vec::with_capacity(term_months as usize);
        let mut balance = principal;

        for month in 1..=term_months {
            let payment = differential_payment(principal, annual_rate, term_months, month);
            let interest_portion = payment - principal_portion;
            balance -= principal_portion;
            let balance_after = balance.max(Money::ZERO);

            schedule.push(PaymentLine {
                month,
                payment,
                principal_portion,
                interest_portion,
                balance_after,
            });
        }

        Ok(schedule)
    }
}

/// constant monthly payment for an annuity loan
///
/// payment = P * r * (1 + r)^n / ((1 + r)^n - 1)
///
/// a zero rate degenerates the formula to 0/0, so it is special-cased as
/// equal principal-only installments
pub fn annuity_monthly_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
) -> Result<Money> {
    if term_months == 0 {
        return Ok(principal);
    }

    let monthly_rate = annual_rate.monthly_rate();

    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let compound = monthly_rate.compound_factor(term_months).ok_or_else(|| {
        LoanError::CalculationError {
            message: format!("compounding {annual_rate} over {term_months} months overflows"),
        }
    })?;
    let numerator = principal.as_decimal() * monthly_rate.as_decimal() * compound;
    let denominator = compound - Decimal::ONE;

    Ok(Money::from_decimal(numerator / denominator))
}

/// payment for a given month (1-based) of a differential loan
///
/// the principal portion is fixed at P/n; interest accrues on the principal
/// still outstanding before this month's payment
pub fn differential_payment(
    principal: Money,
    annual_rate: Rate,
    term_months: u32,
    month: u32,
) -> Money {
    let monthly_rate = annual_rate.monthly_rate();
    let principal_portion = principal / Decimal::from(term_months);
    let remaining_principal = principal - principal_portion * Decimal::from(month - 1);
    let interest_portion = remaining_principal * monthly_rate.as_decimal();

    principal_portion + interest_portion
}
