use thiserror::Error;

use crate::types::{CustomerId, LoanId};

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid input: {field} = {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
    },

    #[error("loan {loan_id} has no computed payment")]
    IncompleteRecord {
        loan_id: LoanId,
    },

    #[error("duplicate loan id: {loan_id}")]
    DuplicateLoanId {
        loan_id: LoanId,
    },

    #[error("loan id {loan_id} does not match customer id {customer_id}")]
    IdMismatch {
        loan_id: LoanId,
        customer_id: CustomerId,
    },

    #[error("invalid borrower: {message}")]
    InvalidBorrower {
        message: String,
    },

    #[error("conversion error: {message}")]
    Conversion {
        message: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoanError>;
