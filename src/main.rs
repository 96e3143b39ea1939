use clap::Parser;
use log::debug;
use send_mail::{config::load_dotenv, logging::init_logging, run, Cli};

fn main() -> anyhow::Result<()> {
    // Before parsing so `.env` can supply the account and password fallbacks
    let dotenv = load_dotenv();
    let cli = Cli::parse();
    init_logging(cli.log_level.into(), cli.log_file.as_deref())?;
    match dotenv? {
        Some(path) => debug!("Loaded environment from {path:?}"),
        None => debug!("No .env file found"),
    }
    run(cli)?;
    Ok(())
}
