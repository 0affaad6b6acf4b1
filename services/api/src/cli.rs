use crate::screen::{run_analyze_jd, run_screen, AnalyzeJdArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use resume_screener::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Resume Screener",
    about = "Score resumes against recruiter criteria over HTTP or from the command line",
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
    /// Score plain-text resumes from files or directories and print a shortlist
    Screen(ScreenArgs),
    /// Read a job description and print the matching filter criteria as JSON
    AnalyzeJd(AnalyzeJdArgs),
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
        Command::Screen(args) => run_screen(args),
        Command::AnalyzeJd(args) => run_analyze_jd(args),
    }
}
