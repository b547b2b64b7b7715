pub mod amortization;

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::types::{tenure_months, validate_inputs, LoanTerms};

pub use amortization::{amortization_schedule, AmortizationSchedule, PeriodEntry};

/// monthly decimal rate from an annual percentage (8.5 -> 0.0070833..)
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}

/// fixed monthly payment that retires the loan over the tenure
///
/// payment = P * r / (1 - (1 + r)^-n), falling back to P / n at a zero rate.
/// The denominator is evaluated as -expm1(-n * ln(1 + r)) so it keeps full
/// precision when `1 + r` rounds to 1.
pub fn monthly_payment(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64> {
    validate_inputs(principal, annual_rate_percent, tenure_years)?;

    let months = f64::from(tenure_months(tenure_years)?);
    let r = monthly_rate(annual_rate_percent);

    if r == 0.0 {
        return Ok(principal / months);
    }

    let denominator = -(-months * r.ln_1p()).exp_m1();
    Ok(principal * r / denominator)
}

/// interest paid over the whole tenure
pub fn total_interest(principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64> {
    let payment = monthly_payment(principal, annual_rate_percent, tenure_years)?;
    Ok(payment * f64::from(tenure_years) * 12.0 - principal)
}

/// payment figures for one set of terms
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanQuote {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_repayable: f64,
}

/// trait for loan calculators
pub trait LoanCalculator {
    fn monthly_payment(&self, principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64>;

    fn total_interest(&self, principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64>;

    fn amortization_schedule(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<AmortizationSchedule>;

    fn quote(&self, terms: &LoanTerms) -> Result<LoanQuote> {
        let monthly_payment =
            self.monthly_payment(terms.principal, terms.annual_rate_percent, terms.tenure_years)?;
        let total_interest =
            self.total_interest(terms.principal, terms.annual_rate_percent, terms.tenure_years)?;

        Ok(LoanQuote {
            monthly_payment,
            total_interest,
            total_repayable: terms.principal + total_interest,
        })
    }
}

/// fixed-rate home loan calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct HomeLoanCalculator;

impl HomeLoanCalculator {
    pub fn new() -> Self {
        Self
    }
}

impl LoanCalculator for HomeLoanCalculator {
    fn monthly_payment(&self, principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64> {
        monthly_payment(principal, annual_rate_percent, tenure_years)
    }

    fn total_interest(&self, principal: f64, annual_rate_percent: f64, tenure_years: u32) -> Result<f64> {
        total_interest(principal, annual_rate_percent, tenure_years)
    }

    fn amortization_schedule(
        &self,
        principal: f64,
        annual_rate_percent: f64,
        tenure_years: u32,
    ) -> Result<AmortizationSchedule> {
        amortization_schedule(principal, annual_rate_percent, tenure_years)
    }
}
