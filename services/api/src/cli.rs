use crate::demo::{run_demo, run_roi, run_score, RoiArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use madfam_leads::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "MADFAM Lead Intake",
    about = "Run the MADFAM lead intake service or score leads from the command line",
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
    /// Score a lead submission stored as JSON
    Score(ScoreArgs),
    /// Project ROI for a set of calculator inputs
    Roi(RoiArgs),
    /// Score a handful of sample leads to show the rubric at work
    Demo,
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
        Command::Roi(args) => run_roi(args),
        Command::Demo => run_demo(),
    }
}
