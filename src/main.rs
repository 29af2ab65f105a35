mod cli;
mod component;
mod config;
mod controller;
mod error;
mod logging;
mod state;
mod view;

use clap::Parser;
use cli::Cli;
use config::RcLoader;
use controller::AppController;
use error::AppError;

fn main() -> Result<(), AppError> {
    let cli = Cli::parse();

    if cli.print_rc {
        print!("{}", RcLoader::generate_sample_rc());
        return Ok(());
    }

    logging::init_tracing(cli.log_file.as_deref())?;

    // Load RC configuration
    let config = match &cli.config {
        Some(path) => RcLoader::load_from_path(path)?,
        None => RcLoader::load_config(),
    };

    let props = cli.into_props(config);
    AppController::new(props).run()
}
