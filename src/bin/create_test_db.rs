use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use budget_tracker::initialize_db;

/// A utility for creating a test database for the budget tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,

    /// The ID of the user who owns the sample transactions.
    #[arg(long, default_value = "test-user")]
    user_id: String,
}

const SAMPLE_TRANSACTIONS: [(&str, f64); 6] = [
    ("Salaire", 2100.0),
    ("Loyer", -750.0),
    ("Courses", -86.45),
    ("Remboursement de Marie", 25.0),
    ("Abonnement téléphone", -19.99),
    ("Restaurant avec les collègues du service comptabilité", -42.3),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!(
        "Creating {} transactions for {}...",
        SAMPLE_TRANSACTIONS.len(),
        args.user_id
    );

    let now = OffsetDateTime::now_utc();
    let days_back = SAMPLE_TRANSACTIONS.len() as i64;

    for (i, (text, amount)) in SAMPLE_TRANSACTIONS.into_iter().enumerate() {
        let created_at = now - Duration::days(days_back - i as i64);

        conn.execute(
            "INSERT INTO \"transaction\" (id, text, amount, created_at, user_id)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            (
                Uuid::new_v4().to_string(),
                text,
                amount,
                created_at,
                &args.user_id,
            ),
        )?;
    }

    println!("Success!");

    Ok(())
}
