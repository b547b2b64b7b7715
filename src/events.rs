use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{CustomerId, LoanId};

/// everything the loan desk records while serving a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DeskEvent {
    LoanCalculated {
        loan_id: LoanId,
        principal: f64,
        monthly_payment: f64,
        total_interest: f64,
        timestamp: DateTime<Utc>,
    },
    LoanPersisted {
        loan_id: LoanId,
        timestamp: DateTime<Utc>,
    },
    PersistenceFailed {
        loan_id: LoanId,
        reason: String,
        timestamp: DateTime<Utc>,
    },
    LoanRemoved {
        loan_id: LoanId,
        customer_id: CustomerId,
        loan_deleted: bool,
        borrower_deleted: bool,
        timestamp: DateTime<Utc>,
    },
    BorrowerRegistered {
        customer_id: CustomerId,
        timestamp: DateTime<Utc>,
    },
}

impl DeskEvent {
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            DeskEvent::LoanCalculated { timestamp, .. }
            | DeskEvent::LoanPersisted { timestamp, .. }
            | DeskEvent::PersistenceFailed { timestamp, .. }
            | DeskEvent::LoanRemoved { timestamp, .. }
            | DeskEvent::BorrowerRegistered { timestamp, .. } => *timestamp,
        }
    }
}

/// event log for collecting events during a session
#[derive(Debug, Default)]
pub struct EventLog {
    events: Vec<DeskEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: DeskEvent) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<DeskEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[DeskEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
