use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LoanError, Result};
use crate::store::{LoanRow, LoanStore};
use crate::types::{Borrower, CustomerId, LoanId, NewBorrower};

/// in-process store keyed by id
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryLoanStore {
    loans: BTreeMap<LoanId, LoanRow>,
    borrowers: BTreeMap<CustomerId, Borrower>,
    next_customer_id: CustomerId,
}

impl Default for MemoryLoanStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryLoanStore {
    pub fn new() -> Self {
        Self {
            loans: BTreeMap::new(),
            borrowers: BTreeMap::new(),
            next_customer_id: 1,
        }
    }

    pub fn loan_count(&self) -> usize {
        self.loans.len()
    }

    pub fn borrower_count(&self) -> usize {
        self.borrowers.len()
    }
}

impl LoanStore for MemoryLoanStore {
    fn insert_loan(&mut self, row: LoanRow) -> Result<()> {
        if self.loans.contains_key(&row.loan_id) {
            return Err(LoanError::DuplicateLoanId {
                loan_id: row.loan_id,
            });
        }

        debug!(loan_id = row.loan_id, "loan row inserted");
        self.loans.insert(row.loan_id, row);
        Ok(())
    }

    fn loan(&self, loan_id: LoanId) -> Result<Option<LoanRow>> {
        Ok(self.loans.get(&loan_id).cloned())
    }

    fn loans(&self) -> Result<Vec<LoanRow>> {
        Ok(self.loans.values().cloned().collect())
    }

    fn delete_loan(&mut self, loan_id: LoanId) -> Result<bool> {
        Ok(self.loans.remove(&loan_id).is_some())
    }

    fn insert_borrower(&mut self, borrower: NewBorrower) -> Result<Borrower> {
        let customer_id = self.next_customer_id;
        self.next_customer_id += 1;

        let borrower = borrower.with_id(customer_id);
        debug!(customer_id, "borrower inserted");
        self.borrowers.insert(customer_id, borrower.clone());
        Ok(borrower)
    }

    fn borrower(&self, customer_id: CustomerId) -> Result<Option<Borrower>> {
        Ok(self.borrowers.get(&customer_id).cloned())
    }

    fn delete_borrower(&mut self, customer_id: CustomerId) -> Result<bool> {
        Ok(self.borrowers.remove(&customer_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn row(loan_id: LoanId) -> LoanRow {
        LoanRow {
            loan_id,
            loan_amount: dec!(12000),
            interest_rate: dec!(0),
            tenure_years: 1,
            monthly_payment: dec!(1000),
            total_interest: dec!(0),
        }
    }

    #[test]
    fn test_loan_primary_key() {
        let mut store = MemoryLoanStore::new();
        store.insert_loan(row(1)).unwrap();

        let err = store.insert_loan(row(1)).unwrap_err();
        assert!(matches!(err, LoanError::DuplicateLoanId { loan_id: 1 }));
        assert_eq!(store.loan_count(), 1);
    }

    #[test]
    fn test_loans_listed_by_id() {
        let mut store = MemoryLoanStore::new();
        store.insert_loan(row(9)).unwrap();
        store.insert_loan(row(2)).unwrap();
        store.insert_loan(row(5)).unwrap();

        let ids: Vec<LoanId> = store.loans().unwrap().iter().map(|r| r.loan_id).collect();
        assert_eq!(ids, vec![2, 5, 9]);
    }

    #[test]
    fn test_delete_loan() {
        let mut store = MemoryLoanStore::new();
        store.insert_loan(row(3)).unwrap();

        assert!(store.delete_loan(3).unwrap());
        assert!(!store.delete_loan(3).unwrap());
        assert!(store.loan(3).unwrap().is_none());
    }

    #[test]
    fn test_customer_ids_auto_increment() {
        let mut store = MemoryLoanStore::new();
        let first = store
            .insert_borrower(NewBorrower::new("ravi", "ravi@example.com", "9000000001").unwrap())
            .unwrap();
        let second = store
            .insert_borrower(NewBorrower::new("meera", "meera@example.com", "9000000002").unwrap())
            .unwrap();

        assert_eq!(first.customer_id, 1);
        assert_eq!(second.customer_id, 2);

        // ids are not reused after a delete
        assert!(store.delete_borrower(2).unwrap());
        let third = store
            .insert_borrower(NewBorrower::new("kiran", "kiran@example.com", "9000000003").unwrap())
            .unwrap();
        assert_eq!(third.customer_id, 3);
        assert_eq!(store.borrower_count(), 2);
    }
}
