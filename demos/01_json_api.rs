/// json api - the request/response contract an http layer would speak
use loan_amortization_rs::handle_calculate;

fn main() {
    env_logger::init();

    // a valid differential request with a down payment
    let body = r#"{
        "loanAmount": 1000000,
        "interestRate": 10,
        "loanTerm": 10,
        "paymentType": "differential",
        "downPayment": 0
    }"#;

    let response = handle_calculate(body);
    println!("status {}", response.status);
    println!("{}\n", response.body);

    // a typo in the payment type is rejected, not silently defaulted
    let bad = r#"{
        "loanAmount": 1000000,
        "interestRate": 10,
        "loanTerm": 10,
        "paymentType": "anuity"
    }"#;

    let response = handle_calculate(bad);
    println!("status {}", response.status);
    println!("{}", response.body);
}
