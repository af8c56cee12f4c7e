use anyhow::Result;
use aplus_api::client::client;
use app_utils::{init_tracing, Config};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use find_stuck_submissions::cli::Cli;
use find_stuck_submissions::run;
use tracing::debug;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    // Bad options and bad config both stop here, before any request is made.
    let options = cli
        .scan_options()
        .unwrap_or_else(|err| Cli::command().error(ErrorKind::ArgumentConflict, err).exit());
    let config = Config::from_path(cli.config())
        .unwrap_or_else(|err| Cli::command().error(ErrorKind::InvalidValue, format!("{err:#}")).exit());
    debug!(?options, "initialized");

    let aplus = client(config.access_token().clone(), config.api_url().clone())?;
    let summary = run(aplus, config.course_id(), &options, cli.urls_file()).await?;

    println!("{summary}");

    Ok(())
}
