/// session history - calculate several loans and review them like an administrator
use home_loan_rs::logging::init_tracing;
use home_loan_rs::report::{history_report, loan_summary, schedule_report};
use home_loan_rs::{DeskConfig, LoanDesk, LoanTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = DeskConfig::default();
    init_tracing(&config.log_filter);

    let mut desk = LoanDesk::from_config(&config)?;

    let borrower = desk.register_borrower("asha", "asha@example.com", "9876543210")?;
    let outcome = desk.calculate(borrower.customer_id, LoanTerms::home_loan(2_500_000.0, 8.5)?)?;

    println!("---Calculations---");
    print!("{}", loan_summary(&outcome.record));
    if config.show_schedule {
        println!("---Amortization Schedule---");
        print!("{}", schedule_report(&outcome.schedule));
    }

    // two more quotes, one of them interest free
    desk.calculate(2, LoanTerms::new(1_200_000.0, 7.25, 15)?)?;
    desk.calculate(3, LoanTerms::new(120_000.0, 0.0, 1)?)?;

    println!("---Displaying recent Loan Calculation History---");
    print!("{}", history_report(desk.recent_history()));

    match desk.lookup_stored(2)? {
        Some(loan) => print!("{}", loan_summary(&loan)),
        None => println!("Loan with ID 2 not found."),
    }

    let removal = desk.remove_loan(borrower.customer_id, borrower.customer_id)?;
    println!("removed: {:?}", removal);

    Ok(())
}
