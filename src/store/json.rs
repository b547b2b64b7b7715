use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::Result;
use crate::store::{LoanRow, LoanStore, MemoryLoanStore};
use crate::types::{Borrower, CustomerId, LoanId, NewBorrower};

/// store persisted as a json snapshot on disk
///
/// every mutation rewrites the whole snapshot through a temporary file and a
/// rename, so a crash leaves either the old or the new file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: MemoryLoanStore,
}

impl JsonFileStore {
    /// open the snapshot at `path`, starting empty when the file is missing
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let inner = if path.exists() {
            let data = fs::read_to_string(&path)?;
            let inner: MemoryLoanStore = serde_json::from_str(&data)?;
            info!(
                path = %path.display(),
                loans = inner.loan_count(),
                borrowers = inner.borrower_count(),
                "loan store loaded"
            );
            inner
        } else {
            debug!(path = %path.display(), "no loan store on disk, starting empty");
            MemoryLoanStore::new()
        };

        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self, snapshot: &MemoryLoanStore) -> Result<()> {
        let tmp = self.path.with_extension("tmp");
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&tmp, json)?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    /// apply a change to a staged copy and keep it only once it is on disk
    fn commit<T>(&mut self, change: impl FnOnce(&mut MemoryLoanStore) -> Result<T>) -> Result<T> {
        let mut staged = self.inner.clone();
        let value = change(&mut staged)?;
        self.save(&staged)?;
        self.inner = staged;
        Ok(value)
    }
}

impl LoanStore for JsonFileStore {
    fn insert_loan(&mut self, row: LoanRow) -> Result<()> {
        self.commit(|store| store.insert_loan(row))
    }

    fn loan(&self, loan_id: LoanId) -> Result<Option<LoanRow>> {
        self.inner.loan(loan_id)
    }

    fn loans(&self) -> Result<Vec<LoanRow>> {
        self.inner.loans()
    }

    fn delete_loan(&mut self, loan_id: LoanId) -> Result<bool> {
        if self.inner.loan(loan_id)?.is_none() {
            return Ok(false);
        }
        self.commit(|store| store.delete_loan(loan_id))
    }

    fn insert_borrower(&mut self, borrower: NewBorrower) -> Result<Borrower> {
        self.commit(|store| store.insert_borrower(borrower))
    }

    fn borrower(&self, customer_id: CustomerId) -> Result<Option<Borrower>> {
        self.inner.borrower(customer_id)
    }

    fn delete_borrower(&mut self, customer_id: CustomerId) -> Result<bool> {
        if self.inner.borrower(customer_id)?.is_none() {
            return Ok(false);
        }
        self.commit(|store| store.delete_borrower(customer_id))
    }
}
