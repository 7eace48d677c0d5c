use crate::commands::{run_convert, run_score, ConvertArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use crs_engine::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "CRS Calculator",
    about = "Score Express Entry profiles and convert language test results to CLB levels",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score an applicant profile stored as JSON
    Score(ScoreArgs),
    /// Convert raw language test scores to CLB levels
    Convert(ConvertArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Convert(args) => run_convert(args),
    }
}
