use clap::Parser;
use qalyzer::errors::ErrorHandler;
use qalyzer::structs::cli::Cli;
use qalyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut runner = CommandRunner::new();
    if let Err(error) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        return Err(anyhow::anyhow!(error.user_message()));
    }

    Ok(())
}
