use clap::Parser;

/// Local host for one availability check. Settings come from the same
/// environment variables the Lambda function reads.
#[derive(Debug, Clone, Parser)]
#[command(name = "restock-watch")]
#[command(about = "Check a product page once and notify when it is back in stock")]
pub struct CliArgs {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON lines")]
    pub json_logs: bool,

    #[arg(long, help = "Log the notification instead of sending it")]
    pub dry_run: bool,
}
