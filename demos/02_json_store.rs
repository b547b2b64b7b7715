/// json store - loans written in one session are readable in the next
use home_loan_rs::report::loan_summary;
use home_loan_rs::{DeskConfig, LoanDesk, LoanTerms, StoreBackend};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::temp_dir().join("home_loan_demo.json");
    let _ = std::fs::remove_file(&path);

    let config = DeskConfig {
        store: StoreBackend::JsonFile { path: path.clone() },
        show_schedule: false,
        ..DeskConfig::default()
    };

    // session 1
    {
        let mut desk = LoanDesk::from_config(&config)?;
        desk.calculate(1, LoanTerms::new(100_000.0, 6.0, 10)?)?;
        desk.calculate(2, LoanTerms::new(3_000_000.0, 9.0, 25)?)?;
        println!("session 1 history: {} loans", desk.recent_history().len());
    }

    // session 2: empty history, same store
    let desk = LoanDesk::from_config(&config)?;
    println!("session 2 history: {} loans", desk.recent_history().len());
    println!("--- All Loan Details ---");
    for loan in desk.stored_loans()? {
        print!("{}", loan_summary(&loan));
        println!("------------------------");
        println!("{}", loan.json());
    }

    println!("snapshot at {}", path.display());
    Ok(())
}
