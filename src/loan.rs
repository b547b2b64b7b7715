use serde::{Deserialize, Serialize};

use crate::calculator::{LoanCalculator, LoanQuote};
use crate::errors::{LoanError, Result};
use crate::types::{LoanId, LoanTerms};

/// a calculated loan
///
/// `monthly_payment` and `total_interest` stay `None` until the terms have been
/// priced. The id comes from the persistence layer and is never generated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanRecord {
    loan_id: LoanId,
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: u32,
    monthly_payment: Option<f64>,
    total_interest: Option<f64>,
}

impl LoanRecord {
    /// record with terms only
    pub fn new(loan_id: LoanId, terms: LoanTerms) -> Result<Self> {
        terms.validate()?;

        Ok(Self {
            loan_id,
            principal: terms.principal,
            annual_rate_percent: terms.annual_rate_percent,
            tenure_years: terms.tenure_years,
            monthly_payment: None,
            total_interest: None,
        })
    }

    /// record carrying already computed figures
    pub fn priced(loan_id: LoanId, terms: LoanTerms, monthly_payment: f64, total_interest: f64) -> Result<Self> {
        if !monthly_payment.is_finite() || monthly_payment <= 0.0 {
            return Err(LoanError::InvalidInput {
                field: "monthly_payment",
                value: monthly_payment,
            });
        }

        if !total_interest.is_finite() {
            return Err(LoanError::InvalidInput {
                field: "total_interest",
                value: total_interest,
            });
        }

        let mut record = Self::new(loan_id, terms)?;
        record.monthly_payment = Some(monthly_payment);
        record.total_interest = Some(total_interest);
        Ok(record)
    }

    /// price the terms and build the record in one step
    pub fn calculate<C: LoanCalculator>(loan_id: LoanId, terms: LoanTerms, calculator: &C) -> Result<Self> {
        let quote = calculator.quote(&terms)?;
        Self::priced(loan_id, terms, quote.monthly_payment, quote.total_interest)
    }

    pub fn loan_id(&self) -> LoanId {
        self.loan_id
    }

    pub fn principal(&self) -> f64 {
        self.principal
    }

    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }

    pub fn tenure_years(&self) -> u32 {
        self.tenure_years
    }

    pub fn terms(&self) -> LoanTerms {
        LoanTerms {
            principal: self.principal,
            annual_rate_percent: self.annual_rate_percent,
            tenure_years: self.tenure_years,
        }
    }

    pub fn monthly_payment(&self) -> Option<f64> {
        self.monthly_payment
    }

    pub fn total_interest(&self) -> Option<f64> {
        self.total_interest
    }

    pub fn is_priced(&self) -> bool {
        self.monthly_payment.is_some() && self.total_interest.is_some()
    }

    /// principal plus total interest
    pub fn total_repayable(&self) -> Option<f64> {
        self.total_interest.map(|interest| self.principal + interest)
    }

    /// computed figures, or an error naming the loan
    pub fn quote(&self) -> Result<LoanQuote> {
        match (self.monthly_payment, self.total_interest) {
            (Some(monthly_payment), Some(total_interest)) => Ok(LoanQuote {
                monthly_payment,
                total_interest,
                total_repayable: self.principal + total_interest,
            }),
            _ => Err(LoanError::IncompleteRecord {
                loan_id: self.loan_id,
            }),
        }
    }

    /// pretty json for debugging and monitoring
    pub fn json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
