use crate::loan::LoanRecord;
use crate::types::LoanId;

/// session-scoped catalog of calculated loans
///
/// Insertion order is kept and ids are not required to be unique; lookups
/// return the earliest record with a matching id.
#[derive(Debug, Clone, Default)]
pub struct LoanRegistry {
    records: Vec<LoanRecord>,
}

impl LoanRegistry {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn add(&mut self, record: LoanRecord) {
        self.records.push(record);
    }

    pub fn all(&self) -> &[LoanRecord] {
        &self.records
    }

    pub fn find_by_id(&self, loan_id: LoanId) -> Option<&LoanRecord> {
        self.records.iter().find(|record| record.loan_id() == loan_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
