/// program matching - filter a lender catalog against a requested purchase
use loan_amortization_rs::{
    Bank, Money, MortgageProgram, ProgramCatalog, ProgramKind, Rate, TermRange,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = ProgramCatalog::new(vec![Bank {
        id: "demo".to_string(),
        name: "Demo Bank".to_string(),
        programs: vec![
            MortgageProgram {
                id: "demo-standard".to_string(),
                name: "Standard mortgage".to_string(),
                description: "new or existing housing".to_string(),
                min_rate: Rate::from_percentage(dec!(22.99)),
                max_rate: Rate::from_percentage(dec!(22.99)),
                max_amount: Money::from_major(100_000_000),
                min_initial_payment_percent: dec!(15),
                term: TermRange::new(12, 360),
                kind: ProgramKind::Standard,
            },
            MortgageProgram {
                id: "demo-it".to_string(),
                name: "IT mortgage".to_string(),
                description: "reduced rate for accredited IT employees".to_string(),
                min_rate: Rate::from_percentage(dec!(4.7)),
                max_rate: Rate::from_percentage(dec!(5.5)),
                max_amount: Money::from_major(18_000_000),
                min_initial_payment_percent: dec!(30.1),
                term: TermRange::new(12, 360),
                kind: ProgramKind::It,
            },
        ],
    }]);

    let price = Money::from_major(10_000_000);
    let down_payment = Money::from_major(3_500_000);
    let term_months = 240;

    println!(
        "purchase {price}, down payment {down_payment}, {term_months} months\n"
    );

    for program in catalog.matching(price, down_payment, term_months) {
        let estimate = program.estimate_monthly_payment(price, down_payment, term_months)?;
        println!(
            "{:<14} rate from {:<6} monthly payment from {}",
            program.id,
            program.min_rate,
            estimate.round_dp(2)
        );
    }

    Ok(())
}
