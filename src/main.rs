mod config;
mod dates;
mod db;
mod engine;
mod metrics;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::Config::from_env()?;
    let db = db::Database::open(&config.db_path)?;
    let mut store = store::ExpenseStore::open(db)?;

    match args.len() {
        1 => run::as_tui(&mut store),
        _ => run::as_cli(&args, &mut store),
    }
}
