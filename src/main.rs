use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod action;
mod diagnostics;
mod error;
mod fields;
mod inputs;
mod sink;
mod slack;

pub type Result<T> = anyhow::Result<T>;

/// Every option doubles as the environment variable the runner sets, so the
/// binary runs as a step with no arguments.
#[derive(Parser)]
#[command(name = "slack-user-lookup")]
#[command(about = "Look up a Slack user by email and expose profile fields as step outputs", long_about = None)]
struct Cli {
    /// Email address of the user to look up.
    #[arg(long, env = "INPUT_EMAIL", default_value = "")]
    email: String,

    /// Comma-separated dotted field paths, e.g. `id,profile.email`.
    #[arg(long, env = "INPUT_FIELDS", default_value = "")]
    fields: String,

    /// Slack bot token.
    #[arg(long, env = "SLACK_BOT_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    #[arg(long, env = "SLACK_API_URL", default_value = slack::config::DEFAULT_API_URL)]
    api_url: String,

    /// Abort the lookup after this many seconds. Unbounded when unset.
    #[arg(long, env = "SLACK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// File the runner collects outputs from. Outputs go to stdout commands
    /// when unset.
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Verbose logging. The runner sets `RUNNER_DEBUG=1`.
    #[arg(long, env = "RUNNER_DEBUG", value_parser = clap::builder::FalseyValueParser::new())]
    debug: bool,
}

fn init_tracing(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let inputs = inputs::Inputs::new(cli.email, cli.fields);

    let config = slack::SlackConfig::new(cli.token)
        .with_api_url(cli.api_url)
        .with_timeout(cli.timeout_secs.map(Duration::from_secs));
    if !config.has_token() {
        diagnostics::warning("SLACK_BOT_TOKEN is not set; the Slack API will reject the lookup.");
    }
    debug!("{:?}", config);

    let client = slack::SlackClient::new(config).context("build Slack HTTP client")?;

    let mut sink = sink::for_environment(cli.output_file);
    action::run(&client, &inputs, sink.as_mut()).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            diagnostics::set_failed(&format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
