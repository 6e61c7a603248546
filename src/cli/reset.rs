use std::io::Write;

use crate::db::remove_database;
use crate::error::Result;
use crate::settings::load_settings;

pub fn run(yes: bool) -> Result<()> {
    let settings = load_settings();
    let db_path = settings.db_path();

    if !yes {
        print!("Delete all data in {}? [y/N] ", db_path.display());
        std::io::stdout().flush()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    remove_database(&db_path)?;
    tracing::info!(path = %db_path.display(), "deleted all data");
    println!("Deleted all data.");
    Ok(())
}
