use hourglass_rs::{SafeTimeProvider, TimeSource};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::calculator::{AmortizationSchedule, HomeLoanCalculator, LoanCalculator};
use crate::config::DeskConfig;
use crate::errors::{LoanError, Result};
use crate::events::{DeskEvent, EventLog};
use crate::loan::LoanRecord;
use crate::registry::LoanRegistry;
use crate::store::{LoanRow, LoanStore};
use crate::types::{Borrower, CustomerId, LoanId, LoanTerms, NewBorrower};

/// result of a calculation served by the desk
#[derive(Debug, Clone, PartialEq)]
pub struct LoanOutcome {
    pub record: LoanRecord,
    pub schedule: AmortizationSchedule,
    /// false when the store rejected the write; the session keeps the record anyway
    pub persisted: bool,
}

/// result of removing a loan and its borrower from the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Removal {
    pub loan_id: LoanId,
    pub customer_id: CustomerId,
    pub loan_deleted: bool,
    pub borrower_deleted: bool,
}

/// one working session: calculator, session registry and the durable store
pub struct LoanDesk<C: LoanCalculator = HomeLoanCalculator> {
    calculator: C,
    registry: LoanRegistry,
    store: Box<dyn LoanStore>,
    time: SafeTimeProvider,
    events: EventLog,
}

impl LoanDesk<HomeLoanCalculator> {
    pub fn new(store: Box<dyn LoanStore>, time: SafeTimeProvider) -> Self {
        Self::with_calculator(HomeLoanCalculator::new(), store, time)
    }

    /// desk on the configured store, using system time
    pub fn from_config(config: &DeskConfig) -> Result<Self> {
        let store = config.open_store()?;
        Ok(Self::new(store, SafeTimeProvider::new(TimeSource::System)))
    }
}

impl<C: LoanCalculator> LoanDesk<C> {
    pub fn with_calculator(calculator: C, store: Box<dyn LoanStore>, time: SafeTimeProvider) -> Self {
        Self {
            calculator,
            registry: LoanRegistry::new(),
            store,
            time,
            events: EventLog::new(),
        }
    }

    /// price the terms, write them to the store and remember them for the session
    pub fn calculate(&mut self, loan_id: LoanId, terms: LoanTerms) -> Result<LoanOutcome> {
        let record = LoanRecord::calculate(loan_id, terms, &self.calculator)?;
        let schedule = self.calculator.amortization_schedule(
            terms.principal,
            terms.annual_rate_percent,
            terms.tenure_years,
        )?;
        let quote = record.quote()?;
        let now = self.time.now();

        info!(
            loan_id,
            principal = terms.principal,
            rate = terms.annual_rate_percent,
            years = terms.tenure_years,
            monthly_payment = quote.monthly_payment,
            "loan calculated"
        );
        self.events.emit(DeskEvent::LoanCalculated {
            loan_id,
            principal: terms.principal,
            monthly_payment: quote.monthly_payment,
            total_interest: quote.total_interest,
            timestamp: now,
        });

        let write = LoanRow::from_record(&record).and_then(|row| self.store.insert_loan(row));
        let persisted = match write {
            Ok(()) => {
                self.events.emit(DeskEvent::LoanPersisted {
                    loan_id,
                    timestamp: now,
                });
                true
            }
            Err(e) => {
                warn!(loan_id, error = %e, "loan not persisted");
                self.events.emit(DeskEvent::PersistenceFailed {
                    loan_id,
                    reason: e.to_string(),
                    timestamp: now,
                });
                false
            }
        };

        self.registry.add(record.clone());

        Ok(LoanOutcome {
            record,
            schedule,
            persisted,
        })
    }

    /// loans calculated during this session, oldest first
    pub fn recent_history(&self) -> &[LoanRecord] {
        self.registry.all()
    }

    pub fn find_recent(&self, loan_id: LoanId) -> Option<&LoanRecord> {
        self.registry.find_by_id(loan_id)
    }

    /// read a loan back from the store
    pub fn lookup_stored(&self, loan_id: LoanId) -> Result<Option<LoanRecord>> {
        debug!(loan_id, "looking up stored loan");
        self.store
            .loan(loan_id)?
            .map(|row| row.to_record())
            .transpose()
    }

    /// every stored loan, ordered by id
    pub fn stored_loans(&self) -> Result<Vec<LoanRecord>> {
        self.store
            .loans()?
            .iter()
            .map(LoanRow::to_record)
            .collect()
    }

    pub fn register_borrower(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Borrower> {
        let borrower = self
            .store
            .insert_borrower(NewBorrower::new(name, email, phone_number)?)?;

        info!(customer_id = borrower.customer_id, "borrower registered");
        self.events.emit(DeskEvent::BorrowerRegistered {
            customer_id: borrower.customer_id,
            timestamp: self.time.now(),
        });
        Ok(borrower)
    }

    pub fn borrower(&self, customer_id: CustomerId) -> Result<Option<Borrower>> {
        self.store.borrower(customer_id)
    }

    /// delete a stored loan together with its borrower
    ///
    /// loan and customer ids must match. The session registry keeps its copy.
    pub fn remove_loan(&mut self, loan_id: LoanId, customer_id: CustomerId) -> Result<Removal> {
        if loan_id != customer_id {
            return Err(LoanError::IdMismatch {
                loan_id,
                customer_id,
            });
        }

        let loan_deleted = self.store.delete_loan(loan_id)?;
        let borrower_deleted = self.store.delete_borrower(customer_id)?;

        info!(loan_id, customer_id, loan_deleted, borrower_deleted, "loan removed");
        self.events.emit(DeskEvent::LoanRemoved {
            loan_id,
            customer_id,
            loan_deleted,
            borrower_deleted,
            timestamp: self.time.now(),
        });

        Ok(Removal {
            loan_id,
            customer_id,
            loan_deleted,
            borrower_deleted,
        })
    }

    pub fn registry(&self) -> &LoanRegistry {
        &self.registry
    }

    pub fn events(&self) -> &[DeskEvent] {
        self.events.events()
    }

    pub fn take_events(&mut self) -> Vec<DeskEvent> {
        self.events.take_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{JsonFileStore, MemoryLoanStore};
    use chrono::{TimeZone, Utc};

    fn desk() -> LoanDesk {
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        LoanDesk::new(Box::new(MemoryLoanStore::new()), time)
    }

    fn terms(principal: f64) -> LoanTerms {
        LoanTerms::new(principal, 6.0, 10).unwrap()
    }

    #[test]
    fn test_calculate_persists_and_registers() {
        let mut desk = desk();
        let outcome = desk.calculate(1, terms(100_000.0)).unwrap();

        assert!(outcome.persisted);
        assert_eq!(outcome.schedule.len(), 120);
        assert_eq!(format!("{:.2}", outcome.record.monthly_payment().unwrap()), "1110.21");

        assert_eq!(desk.recent_history().len(), 1);
        assert_eq!(desk.find_recent(1), Some(&outcome.record));

        let stored = desk.lookup_stored(1).unwrap().unwrap();
        assert_eq!(stored.tenure_years(), 10);
        let diff = stored.total_interest().unwrap() - outcome.record.total_interest().unwrap();
        assert!(diff.abs() < 1e-6);
    }

    #[test]
    fn test_failed_write_keeps_session_record() {
        let mut desk = desk();
        desk.calculate(5, terms(1_000.0)).unwrap();
        let second = desk.calculate(5, terms(2_000.0)).unwrap();

        assert!(!second.persisted);
        assert_eq!(desk.recent_history().len(), 2);
        // first match wins in the session registry
        assert_eq!(desk.find_recent(5).map(LoanRecord::principal), Some(1_000.0));
        // the store still holds the first write only
        assert_eq!(desk.stored_loans().unwrap().len(), 1);

        assert!(desk
            .events()
            .iter()
            .any(|e| matches!(e, DeskEvent::PersistenceFailed { loan_id: 5, .. })));
    }

    #[test]
    fn test_store_io_failure_keeps_session_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("missing").join("loans.json")).unwrap();
        let time = SafeTimeProvider::new(TimeSource::Test(
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        ));
        let mut desk = LoanDesk::new(Box::new(store), time);

        let outcome = desk.calculate(1, terms(100_000.0)).unwrap();
        assert!(!outcome.persisted);
        assert_eq!(outcome.schedule.len(), 120);

        // the session remembers the loan, the store does not
        assert_eq!(desk.find_recent(1), Some(&outcome.record));
        assert!(desk.lookup_stored(1).unwrap().is_none());
        assert!(desk.stored_loans().unwrap().is_empty());
        assert!(matches!(
            desk.events().last(),
            Some(DeskEvent::PersistenceFailed { loan_id: 1, .. })
        ));
    }

    #[test]
    fn test_tiny_rate_and_huge_tenure() {
        let mut desk = desk();
        let outcome = desk.calculate(2, LoanTerms::new(100_000.0, 1e-14, 10).unwrap()).unwrap();
        assert!(outcome.record.monthly_payment().unwrap().is_finite());
        assert!(outcome.schedule.final_balance().abs() < 1e-6);
        assert!(outcome.persisted);

        let huge = LoanTerms {
            principal: 100_000.0,
            annual_rate_percent: 6.0,
            tenure_years: 400_000_000,
        };
        assert!(matches!(
            desk.calculate(3, huge),
            Err(LoanError::InvalidInput { field: "tenure_years", .. })
        ));
        assert!(desk.find_recent(3).is_none());
    }

    #[test]
    fn test_invalid_terms_leave_no_trace() {
        let mut desk = desk();
        let bad = LoanTerms {
            principal: -100.0,
            annual_rate_percent: 5.0,
            tenure_years: 10,
        };

        assert!(matches!(desk.calculate(1, bad), Err(LoanError::InvalidInput { .. })));
        assert!(desk.recent_history().is_empty());
        assert!(desk.stored_loans().unwrap().is_empty());
        assert!(desk.events().is_empty());
    }

    #[test]
    fn test_lookup_missing_loan() {
        let desk = desk();
        assert!(desk.lookup_stored(99).unwrap().is_none());
        assert!(desk.find_recent(99).is_none());
    }

    #[test]
    fn test_remove_requires_matching_ids() {
        let mut desk = desk();
        let borrower = desk.register_borrower("ravi", "ravi@example.com", "9000000001").unwrap();
        desk.calculate(borrower.customer_id, terms(50_000.0)).unwrap();

        let err = desk.remove_loan(borrower.customer_id, 7).unwrap_err();
        assert!(matches!(err, LoanError::IdMismatch { .. }));

        let removal = desk.remove_loan(borrower.customer_id, borrower.customer_id).unwrap();
        assert!(removal.loan_deleted);
        assert!(removal.borrower_deleted);
        assert!(desk.lookup_stored(borrower.customer_id).unwrap().is_none());
        assert!(desk.borrower(borrower.customer_id).unwrap().is_none());

        // session history is not affected by store deletes
        assert_eq!(desk.recent_history().len(), 1);
    }

    #[test]
    fn test_events_are_stamped_with_desk_time() {
        let mut desk = desk();
        desk.calculate(3, terms(10_000.0)).unwrap();

        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let events = desk.take_events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], DeskEvent::LoanCalculated { loan_id: 3, .. }));
        assert!(matches!(events[1], DeskEvent::LoanPersisted { loan_id: 3, .. }));
        assert!(events.iter().all(|e| e.timestamp() == at));
        assert!(desk.events().is_empty());
    }

    #[test]
    fn test_invalid_borrower_not_stored() {
        let mut desk = desk();
        assert!(desk.register_borrower("ravi", "ravi@example.com", "90-00").is_err());
        assert!(desk.borrower(1).unwrap().is_none());
    }
}
