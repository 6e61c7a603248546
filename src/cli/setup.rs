use super::open_db;
use crate::error::{FinanceError, Result};
use crate::fmt::money;
use crate::models::User;
use crate::store::queries::{first_user, insert_batch, insert_user};
use crate::store::sample::sample_transactions;
use crate::views::setup::parse_birth_date;

pub struct SetupArgs {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub dob: Option<String>,
    pub occupation: Option<String>,
    pub seed: bool,
}

pub fn run(args: SetupArgs) -> Result<()> {
    let date_of_birth = match args.dob.as_deref() {
        Some(raw) => Some(parse_birth_date(raw).ok_or_else(|| FinanceError::InvalidDate(raw.to_string()))?),
        None => None,
    };

    let conn = open_db()?;
    if first_user(&conn)?.is_some() {
        return Err(FinanceError::Other(
            "a profile already exists; run `financetrack reset` to start over".to_string(),
        ));
    }

    let balance = if args.seed {
        insert_batch(&conn, &sample_transactions())?
    } else {
        0.0
    };

    let user = User {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        date_of_birth,
        occupation: args.occupation.filter(|o| !o.trim().is_empty()),
        balance,
    };
    insert_user(&conn, &user)?;

    tracing::info!(first_name = %user.first_name, seeded = args.seed, "profile created");
    println!("Welcome, {}! Opening balance {}", user.first_name, money(balance));
    Ok(())
}
