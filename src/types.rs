use serde::{Deserialize, Serialize};

use crate::errors::{LoanError, Result};

/// loan identifier, assigned by the persistence layer
pub type LoanId = u32;

/// customer identifier, assigned by the persistence layer
pub type CustomerId = u32;

/// validated loan parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<Self> {
        let terms = Self {
            principal,
            annual_rate_percent,
            tenure_years,
        };
        terms.validate()?;
        Ok(terms)
    }

    /// standard fixed-rate home loan
    pub fn home_loan(principal: f64, annual_rate_percent: f64) -> Result<Self> {
        Self::new(principal, annual_rate_percent, 20)
    }

    pub fn validate(&self) -> Result<()> {
        validate_inputs(self.principal, self.annual_rate_percent, self.tenure_years)
    }

    /// number of monthly periods
    pub fn months(&self) -> u32 {
        self.tenure_years.saturating_mul(12)
    }
}

/// tenure in months, rejecting tenures whose month count does not fit a `u32`
pub fn tenure_months(tenure_years: u32) -> Result<u32> {
    tenure_years
        .checked_mul(12)
        .ok_or(LoanError::InvalidInput {
            field: "tenure_years",
            value: f64::from(tenure_years),
        })
}

/// check the raw calculation inputs
pub fn validate_inputs(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<()> {
    if !principal.is_finite() || principal <= 0.0 {
        return Err(LoanError::InvalidInput {
            field: "principal",
            value: principal,
        });
    }

    if !annual_rate_percent.is_finite() || annual_rate_percent < 0.0 {
        return Err(LoanError::InvalidInput {
            field: "annual_rate_percent",
            value: annual_rate_percent,
        });
    }

    if tenure_years == 0 {
        return Err(LoanError::InvalidInput {
            field: "tenure_years",
            value: 0.0,
        });
    }

    tenure_months(tenure_years)?;
    Ok(())
}

/// registered borrower
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Borrower {
    pub customer_id: CustomerId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

/// borrower details before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBorrower {
    pub name: String,
    pub email: String,
    pub phone_number: String,
}

impl NewBorrower {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Result<Self> {
        let borrower = Self {
            name: name.into(),
            email: email.into(),
            phone_number: phone_number.into(),
        };

        if borrower.name.trim().is_empty() {
            return Err(LoanError::InvalidBorrower {
                message: "name is empty".to_string(),
            });
        }

        if borrower.phone_number.is_empty()
            || !borrower.phone_number.chars().all(|c| c.is_ascii_digit())
        {
            return Err(LoanError::InvalidBorrower {
                message: format!("phone number is not valid: {}", borrower.phone_number),
            });
        }

        Ok(borrower)
    }

    pub fn with_id(self, customer_id: CustomerId) -> Borrower {
        Borrower {
            customer_id,
            name: self.name,
            email: self.email,
            phone_number: self.phone_number,
        }
    }
}
