use crate::db::{get_connection, init_db};
use crate::error::Result;
use crate::settings::{load_settings, save_settings, shellexpand_path};

pub fn run(data_dir: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    if let Some(dir) = data_dir {
        settings.data_dir = shellexpand_path(&dir);
    }
    save_settings(&settings)?;

    std::fs::create_dir_all(settings.data_path())?;
    let conn = get_connection(&settings.db_path())?;
    init_db(&conn)?;

    tracing::info!(data_dir = %settings.data_dir, "initialized");
    println!("Initialized financetrack at {}", settings.data_path().display());
    Ok(())
}
