pub mod json;
pub mod memory;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};
use crate::loan::LoanRecord;
use crate::types::{Borrower, CustomerId, LoanId, LoanTerms, NewBorrower};

pub use json::JsonFileStore;
pub use memory::MemoryLoanStore;

/// persisted loan, amounts held as fixed-point columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRow {
    pub loan_id: LoanId,
    pub loan_amount: Decimal,
    pub interest_rate: Decimal,
    pub tenure_years: u32,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
}

impl LoanRow {
    /// row for a priced record
    pub fn from_record(record: &LoanRecord) -> Result<Self> {
        let quote = record.quote()?;

        Ok(Self {
            loan_id: record.loan_id(),
            loan_amount: to_decimal("loan_amount", record.principal())?,
            interest_rate: to_decimal("interest_rate", record.annual_rate_percent())?,
            tenure_years: record.tenure_years(),
            monthly_payment: to_decimal("monthly_payment", quote.monthly_payment)?,
            total_interest: to_decimal("total_interest", quote.total_interest)?,
        })
    }

    /// rebuild a record from the stored columns
    pub fn to_record(&self) -> Result<LoanRecord> {
        let terms = LoanTerms::new(
            to_float("loan_amount", self.loan_amount)?,
            to_float("interest_rate", self.interest_rate)?,
            self.tenure_years,
        )?;

        LoanRecord::priced(
            self.loan_id,
            terms,
            to_float("monthly_payment", self.monthly_payment)?,
            to_float("total_interest", self.total_interest)?,
        )
    }
}

fn to_decimal(column: &str, value: f64) -> Result<Decimal> {
    Decimal::from_f64_retain(value).ok_or_else(|| LoanError::Conversion {
        message: format!("{} = {} is not representable as a decimal", column, value),
    })
}

fn to_float(column: &str, value: Decimal) -> Result<f64> {
    value.to_f64().ok_or_else(|| LoanError::Conversion {
        message: format!("{} = {} is not representable as a float", column, value),
    })
}

/// durable storage for loans and borrowers
pub trait LoanStore {
    /// insert a loan row; the loan id is a primary key
    fn insert_loan(&mut self, row: LoanRow) -> Result<()>;

    fn loan(&self, loan_id: LoanId) -> Result<Option<LoanRow>>;

    /// all rows ordered by loan id
    fn loans(&self) -> Result<Vec<LoanRow>>;

    /// returns whether a row was removed
    fn delete_loan(&mut self, loan_id: LoanId) -> Result<bool>;

    /// insert a borrower and assign its customer id
    fn insert_borrower(&mut self, borrower: NewBorrower) -> Result<Borrower>;

    fn borrower(&self, customer_id: CustomerId) -> Result<Option<Borrower>>;

    fn delete_borrower(&mut self, customer_id: CustomerId) -> Result<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::HomeLoanCalculator;
    use rust_decimal_macros::dec;

    #[test]
    fn test_row_round_trip_keeps_figures() {
        let terms = LoanTerms::new(100_000.0, 6.0, 10).unwrap();
        let record = LoanRecord::calculate(11, terms, &HomeLoanCalculator::new()).unwrap();

        let row = LoanRow::from_record(&record).unwrap();
        assert_eq!(row.loan_id, 11);
        assert_eq!(row.loan_amount, dec!(100000));
        assert_eq!(row.interest_rate, dec!(6));
        assert_eq!(row.monthly_payment.round_dp(2), dec!(1110.21));

        let restored = row.to_record().unwrap();
        assert_eq!(restored.loan_id(), 11);
        assert_eq!(restored.tenure_years(), 10);
        let diff = restored.monthly_payment().unwrap() - record.monthly_payment().unwrap();
        assert!(diff.abs() < 1e-6);
    }

    #[test]
    fn test_unpriced_record_cannot_be_stored() {
        let terms = LoanTerms::new(5_000.0, 3.0, 2).unwrap();
        let record = LoanRecord::new(4, terms).unwrap();

        assert!(matches!(
            LoanRow::from_record(&record),
            Err(LoanError::IncompleteRecord { loan_id: 4 })
        ));
    }

    #[test]
    fn test_row_with_bad_terms_is_rejected() {
        let row = LoanRow {
            loan_id: 2,
            loan_amount: dec!(0),
            interest_rate: dec!(5),
            tenure_years: 10,
            monthly_payment: dec!(0),
            total_interest: dec!(0),
        };
        assert!(row.to_record().is_err());
    }
}
