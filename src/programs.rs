//! lender program catalog
//!
//! banks publish mortgage programs with rate ranges and eligibility limits;
//! this module matches a requested loan against them and previews the
//! annuity payment at each program's best rate

use serde::{Deserialize, Serialize};

use crate::amortization::annuity_monthly_payment;
use crate::decimal::{Money, Rate};
use crate::errors::{LoanError, Result};
use crate::request::LoanRequest;
use crate::types::{PaymentType, ProgramKind, TermRange};

/// a single mortgage program offered by a bank
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MortgageProgram {
    pub id: String,
    pub name: String,
    pub description: String,
    pub min_rate: Rate,
    pub max_rate: Rate,
    pub max_amount: Money,
    /// minimum down payment as a percentage of the property price
    pub min_initial_payment_percent: rust_decimal::Decimal,
    pub term: TermRange,
    pub kind: ProgramKind,
}

impl MortgageProgram {
    /// whether the requested purchase fits this program's limits
    pub fn accepts(&self, property_price: Money, down_payment: Money, term_months: u32) -> bool {
        if property_price <= Money::ZERO || down_payment < Money::ZERO {
            return false;
        }

        let loan_amount = property_price - down_payment;
        if loan_amount <= Money::ZERO || loan_amount > self.max_amount {
            return false;
        }

        if !self.term.contains(term_months) {
            return false;
        }

        down_payment.percent_of(property_price) >= self.min_initial_payment_percent
    }

    /// annuity payment at this program's minimum rate
    pub fn estimate_monthly_payment(
        &self,
        property_price: Money,
        down_payment: Money,
        term_months: u32,
    ) -> Result<Money> {
        let down = if down_payment.is_zero() {
            None
        } else {
            Some(down_payment)
        };

        let request = LoanRequest::new(
            property_price,
            self.min_rate,
            term_months,
            PaymentType::Annuity,
            down,
        )?;

        annuity_monthly_payment(
            request.effective_principal(),
            request.annual_rate,
            request.term_months,
        )
    }
}

/// a bank and the programs it offers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bank {
    pub id: String,
    pub name: String,
    pub programs: Vec<MortgageProgram>,
}

/// caller-provided catalog of banks; nothing is bundled or persisted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramCatalog {
    pub banks: Vec<Bank>,
}

impl ProgramCatalog {
    pub fn new(banks: Vec<Bank>) -> Self {
        Self { banks }
    }

    /// load a catalog from its json representation
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LoanError::InvalidCatalog {
            message: e.to_string(),
        })
    }

    /// programs across all banks that accept the requested purchase,
    /// in catalog order
    pub fn matching(
        &self,
        property_price: Money,
        down_payment: Money,
        term_months: u32,
    ) -> Vec<&MortgageProgram> {
        self.banks
            .iter()
            .flat_map(|bank| bank.programs.iter())
            .filter(|program| program.accepts(property_price, down_payment, term_months))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn program(id: &str, max_amount: i64, min_initial: rust_decimal::Decimal) -> MortgageProgram {
        MortgageProgram {
            id: id.to_string(),
            name: format!("program {id}"),
            description: String::new(),
            min_rate: Rate::from_percentage(dec!(6)),
            max_rate: Rate::from_percentage(dec!(7)),
            max_amount: Money::from_major(max_amount),
            min_initial_payment_percent: min_initial,
            term: TermRange::new(12, 360),
            kind: ProgramKind::Standard,
        }
    }

    #[test]
    fn test_accepts_within_limits() {
        let program = program("a", 9_000_000, dec!(20));
        assert!(program.accepts(
            Money::from_major(5_000_000),
            Money::from_major(1_000_000),
            240
        ));
    }

    #[test]
    fn test_rejects_amount_over_cap() {
        let program = program("a", 9_000_000, dec!(20));
        // loan amount after down payment still exceeds the cap
        assert!(!program.accepts(
            Money::from_major(15_000_000),
            Money::from_major(3_000_000),
            240
        ));
    }

    #[test]
    fn test_rejects_small_down_payment() {
        let program = program("a", 9_000_000, dec!(20));
        // 10% down against a 20% minimum
        assert!(!program.accepts(
            Money::from_major(5_000_000),
            Money::from_major(500_000),
            240
        ));
    }

    #[test]
    fn test_rejects_term_out_of_range() {
        let program = program("a", 9_000_000, dec!(20));
        assert!(!program.accepts(
            Money::from_major(5_000_000),
            Money::from_major(1_000_000),
            6
        ));
    }

    #[test]
    fn test_estimate_uses_min_rate() {
        let program = program("a", 9_000_000, dec!(20));
        let estimate = program
            .estimate_monthly_payment(Money::from_major(5_000_000), Money::from_major(1_000_000), 240)
            .unwrap();

        let expected = annuity_monthly_payment(
            Money::from_major(4_000_000),
            Rate::from_percentage(dec!(6)),
            240,
        )
        .unwrap();
        assert_eq!(estimate, expected);
    }

    #[test]
    fn test_catalog_matching_order() {
        let catalog = ProgramCatalog::new(vec![
            Bank {
                id: "first".to_string(),
                name: "First Bank".to_string(),
                programs: vec![program("first-std", 9_000_000, dec!(20))],
            },
            Bank {
                id: "second".to_string(),
                name: "Second Bank".to_string(),
                programs: vec![
                    program("second-tight", 1_000_000, dec!(20)),
                    program("second-std", 30_000_000, dec!(15)),
                ],
            },
        ]);

        let matches = catalog.matching(
            Money::from_major(5_000_000),
            Money::from_major(1_000_000),
            240,
        );

        let ids: Vec<&str> = matches.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["first-std", "second-std"]);
    }

    #[test]
    fn test_catalog_from_json() {
        let json = r#"{
            "banks": [{
                "id": "demo",
                "name": "Demo Bank",
                "programs": [{
                    "id": "demo-standard",
                    "name": "Standard",
                    "description": "standard mortgage",
                    "minRate": "0.06",
                    "maxRate": "0.07",
                    "maxAmount": "9000000",
                    "minInitialPaymentPercent": "20",
                    "term": { "minMonths": 12, "maxMonths": 360 },
                    "kind": "standard"
                }]
            }]
        }"#;

        let catalog = ProgramCatalog::from_json(json).unwrap();
        assert_eq!(catalog.banks.len(), 1);
        assert_eq!(
            catalog.banks[0].programs[0].min_rate,
            Rate::from_percentage(dec!(6))
        );

        // the whole catalog contract is camelCase, term range included
        let serialized = serde_json::to_string(&catalog).unwrap();
        assert!(serialized.contains("minMonths"));
        assert!(!serialized.contains("min_months"));
    }

    #[test]
    fn test_bad_catalog_json() {
        let err = ProgramCatalog::from_json("[]").unwrap_err();
        assert!(matches!(err, LoanError::InvalidCatalog { .. }));
    }
}
