pub mod calculator;
pub mod config;
pub mod desk;
pub mod errors;
pub mod events;
pub mod loan;
pub mod logging;
pub mod registry;
pub mod report;
pub mod store;
pub mod types;

// re-export key types
pub use calculator::{
    amortization_schedule, monthly_payment, total_interest, AmortizationSchedule,
    HomeLoanCalculator, LoanCalculator, LoanQuote, PeriodEntry,
};
pub use config::{DeskConfig, StoreBackend};
pub use desk::{LoanDesk, LoanOutcome, Removal};
pub use errors::{LoanError, Result};
pub use events::{DeskEvent, EventLog};
pub use loan::LoanRecord;
pub use registry::LoanRegistry;
pub use store::{JsonFileStore, LoanRow, LoanStore, MemoryLoanStore};
pub use types::{Borrower, CustomerId, LoanId, LoanTerms, NewBorrower};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
