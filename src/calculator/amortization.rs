use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::{monthly_payment, monthly_rate};
use crate::errors::Result;
use crate::types::tenure_months;

/// one month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodEntry {
    pub period: u32,
    pub principal_portion: f64,
    pub interest: f64,
    pub balance: f64,
}

impl fmt::Display for PeriodEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Month {}: Principal: {:.2}, Interest: {:.2}, Balance: {:.2}",
            self.period, self.principal_portion, self.interest, self.balance
        )
    }
}

/// amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSchedule {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
    pub monthly_payment: f64,
    pub entries: Vec<PeriodEntry>,
}

impl AmortizationSchedule {
    /// get entry for a 1-based period
    pub fn get_period(&self, period: u32) -> Option<&PeriodEntry> {
        period
            .checked_sub(1)
            .and_then(|index| self.entries.get(index as usize))
    }

    /// balance left after the last period
    pub fn final_balance(&self) -> f64 {
        self.entries
            .last()
            .map(|entry| entry.balance)
            .unwrap_or(self.principal)
    }

    /// sum of the interest column
    pub fn interest_paid(&self) -> f64 {
        self.entries.iter().map(|entry| entry.interest).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodEntry> {
        self.entries.iter()
    }

    /// one display line per period
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

impl<'a> IntoIterator for &'a AmortizationSchedule {
    type Item = &'a PeriodEntry;
    type IntoIter = std::slice::Iter<'a, PeriodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// generate the full month-by-month schedule
///
/// balance is carried in f64 and left as computed; the last balance may sit a
/// hair off zero.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: u32,
) -> Result<AmortizationSchedule> {
    let payment = monthly_payment(principal, annual_rate_percent, tenure_years)?;
    let rate = monthly_rate(annual_rate_percent);
    let months = tenure_months(tenure_years)?;

    let mut entries = Vec::with_capacity(months as usize);
    let mut balance = principal;

    for period in 1..=months {
        let interest = balance * rate;
        let principal_portion = payment - interest;
        balance -= principal_portion;

        entries.push(PeriodEntry {
            period,
            principal_portion,
            interest,
            balance,
        });
    }

    Ok(AmortizationSchedule {
        principal,
        annual_rate_percent,
        tenure_years,
        monthly_payment: payment,
        entries,
    })
}
