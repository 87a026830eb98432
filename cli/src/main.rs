mod config;
mod http;
mod interactive;
mod render;
#[cfg(test)]
mod test_support;

use std::io::{self, Write};

use clap::{Parser, Subcommand};
use fleet::{ApiError, Dashboard, DraftError, SubmitOutcome, UtcOffset, VehicleStatus};

use config::{CliConfig, DEFAULT_TIMEOUT_SECS};
use http::HttpApi;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid API URL `{0}` (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    InvalidDraft(#[from] DraftError),
    #[error("vehicle was not created: {0}")]
    CreateRejected(ApiError),
    #[error("status of vehicle {id} was not updated")]
    UpdateRejected { id: String },
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "fleet-cli", about = "Terminal dashboard for the vehicles API")]
struct Cli {
    #[arg(long, env = "FLEET_API_URL", default_value = fleet::DEFAULT_API_BASE_URL)]
    api_url: String,

    #[arg(long, env = "FLEET_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Log request flow at debug level.
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show counts and the vehicle table.
    List,
    /// Add a vehicle, then show the refreshed dashboard.
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "active")]
        status: VehicleStatus,
    },
    /// Change one vehicle's status, then show the refreshed dashboard.
    SetStatus { id: String, status: VehicleStatus },
    /// Line-oriented session mirroring the browser dashboard.
    Interactive,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CliError> {
    // Must run while the process is still single-threaded.
    let offset = fleet::local_offset();
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .init();

    let config = CliConfig::new(&cli.api_url, cli.timeout_secs)?;
    tracing::debug!(api_url = %config.api_url, timeout_secs = cli.timeout_secs, "fleet-cli starting");

    let mut dashboard = Dashboard::new(HttpApi::new(&config)?);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::List => {
            dashboard.mount().await;
            print_dashboard(&mut stdout, &dashboard, offset)
        }
        Command::Add { name, status } => {
            dashboard.open_modal();
            dashboard.set_draft_name(name);
            dashboard.set_draft_status(status);
            match dashboard.submit().await {
                SubmitOutcome::Created => print_dashboard(&mut stdout, &dashboard, offset),
                SubmitOutcome::Invalid(err) => Err(err.into()),
                SubmitOutcome::Failed(err) => Err(CliError::CreateRejected(err)),
            }
        }
        Command::SetStatus { id, status } => {
            if !dashboard.change_status(&id, status).await {
                return Err(CliError::UpdateRejected { id });
            }
            print_dashboard(&mut stdout, &dashboard, offset)
        }
        Command::Interactive => {
            let stdin = io::stdin().lock();
            interactive::run_session(&mut dashboard, stdin, &mut stdout, offset).await?;
            Ok(())
        }
    }
}

fn print_dashboard<A>(out: &mut impl Write, dashboard: &Dashboard<A>, offset: UtcOffset) -> Result<(), CliError>
where
    A: fleet::VehicleApi,
{
    out.write_all(render::render_dashboard(dashboard.state(), offset).as_bytes())?;
    out.flush()?;
    Ok(())
}
