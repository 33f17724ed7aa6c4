/// quick start - minimal example to get started
use loan_amortization_rs::{AmortizationResult, LoanRequest, Money, PaymentType, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1,200,000 at 7.5% over 12 months, annuity plan
    let request = LoanRequest::new(
        Money::from_major(1_200_000),
        Rate::from_percentage(dec!(7.5)),
        12,
        PaymentType::Annuity,
        None,
    )?;

    let result = AmortizationResult::generate(&request)?;

    println!("monthly payment: {}", result.monthly_payment.round_dp(2));
    println!("total payment:   {}", result.total_payment.round_dp(2));
    println!("total interest:  {}", result.total_interest.round_dp(2));
    println!();

    for line in &result.schedule {
        println!(
            "month {:>2}: payment {:>12} principal {:>12} interest {:>10} balance {:>12}",
            line.month,
            line.payment.round_dp(2),
            line.principal_portion.round_dp(2),
            line.interest_portion.round_dp(2),
            line.balance_after.round_dp(2),
        );
    }

    Ok(())
}
