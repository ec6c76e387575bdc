use std::path::PathBuf;

use clap::{Parser, Subcommand};

use folio::app::App;
use folio::config::Config;
use folio::error::AppResult;
use folio::logging::init_tracing;
use folio::route::{Location, resolve_page_name};

#[derive(Debug, Parser)]
#[command(name = "folio", version, about = "Portfolio viewer for the terminal")]
struct Cli {
    /// Location to open first.
    #[arg(long, value_name = "PATH", default_value = "/")]
    route: String,

    /// Config file to use instead of the default search path.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Swap pages instantly without the curtain overlay.
    #[arg(long)]
    no_transitions: bool,

    /// Log at debug level (needs `log.path` in the config).
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Print the page name a path resolves to.
    Resolve { path: String },
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Cli::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    if let Some(CliCommand::Resolve { path }) = &cli.command {
        println!("{}", resolve_page_name(&Location::new(path)).as_str());
        return Ok(());
    }

    let config = load_config(&cli)?;
    init_tracing(&config.log, cli.verbose)?;

    let mut app = App::new_with_config(config, Location::new(&cli.route));
    app.run().await
}

fn load_config(cli: &Cli) -> AppResult<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if cli.no_transitions {
        config.transition.enabled = false;
    }
    Ok(config)
}
