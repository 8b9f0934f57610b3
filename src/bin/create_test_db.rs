use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use time::{Date, Month};

use money_manager::{
    Database, FixedClock, MoneyManager, stores::SQLiteTransactionStore,
    transaction::count_transactions,
};

/// A utility for creating a test database for money_manager.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Income and expenses recorded in each month: (is income, amount, name, category).
const MONTHLY_TRANSACTIONS: [(bool, f64, &str, &str); 6] = [
    (true, 4200.0, "Salary", "Job"),
    (false, 1450.0, "Rent", "Housing"),
    (false, 320.55, "Groceries", "Food"),
    (false, 64.9, "Takeaways", "Food"),
    (false, 120.0, "Power bill", "Utilities"),
    (false, 45.0, "Bus pass", "Transport"),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let store = SQLiteTransactionStore::new(Database::new(output_path))?;

    for month in [Month::March, Month::April, Month::May] {
        println!("Adding transactions for {month} 2025...");

        for (day, (is_income, amount, name, category)) in
            (1u8..).zip(MONTHLY_TRANSACTIONS.iter().copied())
        {
            let clock = FixedClock(Date::from_calendar_date(2025, month, day)?);
            let mut manager = MoneyManager::new(store.clone(), clock);

            if is_income {
                manager.add_income(amount, name, Some(category))?;
            } else {
                manager.add_expense(amount, name, Some(category))?;
            }
        }
    }

    println!("Adding an uncategorized expense...");
    let clock = FixedClock(Date::from_calendar_date(2025, Month::May, 20)?);
    MoneyManager::new(store.clone(), clock).add_expense(12.5, "Parking", None)?;

    let database = store.database();
    let count = count_transactions(&database.connect()?)?;
    println!(
        "Success! Created {count} transactions in {}",
        database.path().display()
    );

    Ok(())
}
