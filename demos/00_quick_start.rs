/// quick start - price a home loan and print its schedule
use home_loan_rs::{amortization_schedule, monthly_payment, total_interest};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let payment = monthly_payment(100_000.0, 6.0, 10)?;
    let interest = total_interest(100_000.0, 6.0, 10)?;

    println!("Monthly Payment: {:.2}", payment);
    println!("Total Interest: {:.2}", interest);

    let schedule = amortization_schedule(100_000.0, 6.0, 10)?;
    for entry in schedule.iter().take(12) {
        println!("{}", entry);
    }
    println!("... {} months in total", schedule.len());

    Ok(())
}
