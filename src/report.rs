//! textual reports for loans and schedules

use std::fmt::Write;

use crate::calculator::AmortizationSchedule;
use crate::loan::LoanRecord;

/// summary block for one loan
pub fn loan_summary(record: &LoanRecord) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Loan ID: {}", record.loan_id());
    let _ = writeln!(out, "Loan Amount: {:.2}", record.principal());
    let _ = writeln!(out, "Interest Rate: {}", record.annual_rate_percent());
    let _ = writeln!(out, "Tenure (years): {}", record.tenure_years());
    let _ = writeln!(out, "Monthly Payment: {}", figure(record.monthly_payment()));
    let _ = writeln!(out, "Total Interest: {}", figure(record.total_interest()));
    let _ = writeln!(out, "Total Amount to pay :{}", figure(record.total_repayable()));
    out
}

/// one line per period
pub fn schedule_report(schedule: &AmortizationSchedule) -> String {
    let mut out = String::with_capacity(schedule.len() * 64);
    for entry in schedule {
        let _ = writeln!(out, "{}", entry);
    }
    out
}

/// summaries separated by rules, or a notice when there is nothing to show
pub fn history_report(records: &[LoanRecord]) -> String {
    if records.is_empty() {
        return "No loans found.\n".to_string();
    }

    let mut out = String::new();
    for record in records {
        out.push_str(&loan_summary(record));
        out.push_str("----------------------------\n");
    }
    out
}

fn figure(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}
