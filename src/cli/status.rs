use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::fmt::money;
use crate::settings::load_settings;
use crate::store::queries::{count_transactions, first_user};

pub fn run() -> Result<()> {
    let settings = load_settings();
    let db_path = settings.db_path();

    println!("Data dir:   {}", settings.data_path().display());
    println!("Database:   {}", db_path.display());
    println!("Log file:   {}", settings.log_path().display());

    if !db_path.exists() {
        println!();
        println!("Database not found. Run `financetrack init` to set up.");
        return Ok(());
    }

    let conn = get_connection(&db_path)?;
    init_db(&conn)?;
    let user = first_user(&conn)?;
    let records = count_transactions(&conn)?;

    println!();
    match user {
        Some(u) => {
            println!("Profile:    {} {} <{}>", u.first_name, u.last_name, u.email);
            println!("Balance:    {}", money(u.balance));
        }
        None => println!("Profile:    (not set up)"),
    }
    println!("Records:    {records}");
    Ok(())
}
