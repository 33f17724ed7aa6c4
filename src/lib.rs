pub mod amortization;
pub mod api;
pub mod decimal;
pub mod errors;
pub mod programs;
pub mod request;
pub mod types;

// re-export key types
pub use amortization::{
    annuity_monthly_payment, differential_payment, AmortizationCalculator, AmortizationResult,
    PaymentLine,
};
pub use api::{handle_calculate, ApiResponse, CalculateRequest, CalculateResponse, ScheduleEntry};
pub use decimal::{Money, Rate};
pub use errors::{LoanError, Result};
pub use programs::{Bank, MortgageProgram, ProgramCatalog};
pub use request::LoanRequest;
pub use types::{PaymentType, ProgramKind, TermRange};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
