mod app;
mod cli;
mod context;
mod db;
mod error;
mod fmt;
mod ledger;
mod logging;
mod models;
mod navigator;
mod settings;
mod store;
mod summary;
mod tui;
mod views;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let settings = settings::load_settings();
    logging::setup_logging(&settings);

    let result = match cli.command {
        None => app::run(settings),
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Status) => cli::status::run(),
        Some(Commands::Setup {
            first_name,
            last_name,
            email,
            dob,
            occupation,
            seed,
        }) => cli::setup::run(cli::setup::SetupArgs {
            first_name,
            last_name,
            email,
            dob,
            occupation,
            seed,
        }),
        Some(Commands::Add {
            name,
            amount,
            category,
            date,
        }) => cli::ledger::add(&name, &amount, &category, date.as_deref()),
        Some(Commands::List { sort, desc, filter }) => cli::ledger::list(sort, desc, filter),
        Some(Commands::Delete { id }) => cli::ledger::delete(id),
        Some(Commands::Summary { month }) => cli::summary::monthly(month.as_deref()),
        Some(Commands::Trends) => cli::summary::trends(),
        Some(Commands::Seed) => cli::ledger::seed(),
        Some(Commands::Export { file }) => cli::transfer::export(&file),
        Some(Commands::Import { file }) => cli::transfer::import(&file),
        Some(Commands::Reset { yes }) => cli::reset::run(yes),
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
