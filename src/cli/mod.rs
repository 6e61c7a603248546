pub mod init;
pub mod ledger;
pub mod reset;
pub mod setup;
pub mod status;
pub mod summary;
pub mod transfer;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use rusqlite::Connection;

use crate::db::{get_connection, init_db};
use crate::error::{FinanceError, Result};
use crate::settings::load_settings;

/// Open the configured database, creating the data directory and schema if needed.
pub(crate) fn open_db() -> Result<Connection> {
    let settings = load_settings();
    std::fs::create_dir_all(settings.data_path())?;
    let conn = get_connection(&settings.db_path())?;
    init_db(&conn)?;
    Ok(conn)
}

/// First day of a `YYYY-MM` month.
pub(crate) fn parse_month(month: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month.trim()), "%Y-%m-%d")
        .map_err(|_| FinanceError::InvalidDate(month.to_string()))
}

#[derive(Parser)]
#[command(name = "financetrack", version, about = "Personal finance tracker for the terminal.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Date,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterArg {
    Spending,
    Income,
    LastMonth,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Choose a data directory and initialize the database.
    Init {
        /// Path for financetrack data (default: ~/Documents/financetrack)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
    },
    /// Show where data lives and what it holds.
    Status,
    /// Create the profile without the interactive wizard.
    Setup {
        #[arg(long = "first-name")]
        first_name: String,
        #[arg(long = "last-name")]
        last_name: String,
        #[arg(long)]
        email: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        occupation: Option<String>,
        /// Load the sample ledger and use its net as the opening balance
        #[arg(long)]
        seed: bool,
    },
    /// Add a finance record. Negative amounts are spending.
    Add {
        name: String,
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Travel, Transportation, Food & Drink, Entertainment, Services, Shopping or Health
        #[arg(long)]
        category: String,
        /// YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS" (default: now)
        #[arg(long)]
        date: Option<String>,
    },
    /// List finance records.
    List {
        #[arg(long, value_enum)]
        sort: Option<SortKey>,
        /// Reverse the sort order
        #[arg(long)]
        desc: bool,
        /// Show only some records (ignores --sort)
        #[arg(long, value_enum)]
        filter: Option<FilterArg>,
    },
    /// Delete a finance record by id.
    Delete { id: i64 },
    /// Credits and debits for a month compared with the month before.
    Summary {
        /// Month to summarize, YYYY-MM (default: this month)
        #[arg(long)]
        month: Option<String>,
    },
    /// Lifetime money in versus money out, with advice.
    Trends,
    /// Add the sample ledger.
    Seed,
    /// Write all records to a CSV file.
    Export { file: PathBuf },
    /// Read records from a CSV file with name, amount and type columns.
    Import { file: PathBuf },
    /// Delete all data.
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-06").unwrap(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert!(parse_month("2025-13").is_err());
        assert!(parse_month("June").is_err());
    }

    #[test]
    fn test_cli_parses_negative_amount() {
        let cli = Cli::try_parse_from(["financetrack", "add", "Rent", "-900", "--category", "services"]).unwrap();
        match cli.command {
            Some(Commands::Add { amount, category, .. }) => {
                assert_eq!(amount, "-900");
                assert_eq!(category, "services");
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_cli_list_filter_value() {
        let cli = Cli::try_parse_from(["financetrack", "list", "--filter", "last-month"]).unwrap();
        match cli.command {
            Some(Commands::List { filter, sort, desc }) => {
                assert_eq!(filter, Some(FilterArg::LastMonth));
                assert_eq!(sort, None);
                assert!(!desc);
            }
            _ => panic!("expected list"),
        }
    }
}
