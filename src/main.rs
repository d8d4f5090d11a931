//! dashcheck - End-to-End Verification Runner for the Expense Dashboard
//!
//! Main entry point for the CLI application. Running `dashcheck` with no
//! arguments performs the full flow against the default target; exit
//! status is zero only if every step succeeded.

use clap::Parser;
use dashcheck::{core::logging, Config, FlowRunner};

/// Verify the expense dashboard's edit flow end to end
#[derive(Parser, Debug)]
#[command(name = "dashcheck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dashboard URL to verify against
    #[arg(long, short = 'u')]
    url: Option<String>,

    /// Directory screenshots are written into
    #[arg(long, short = 'o')]
    output_dir: Option<std::path::PathBuf>,

    /// Run with a visible browser window
    #[arg(long)]
    headed: bool,

    /// Skip the HTTP reachability probe before launching the browser
    #[arg(long)]
    no_preflight: bool,

    /// Visibility assertion timeout in ms
    #[arg(long)]
    wait_timeout_ms: Option<u64>,

    /// Enable debug output
    #[arg(long, short = 'd')]
    debug: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(args.debug);

    // Build configuration
    let mut config = Config::load();

    // Apply CLI overrides
    if let Some(url) = args.url {
        config.target.url = url;
    }

    if let Some(output_dir) = args.output_dir {
        config.output.dir = output_dir;
    }

    if args.headed {
        config.browser.headed = true;
    }

    if args.no_preflight {
        config.target.preflight = false;
    }

    if let Some(wait_timeout_ms) = args.wait_timeout_ms {
        config.browser.wait_timeout_ms = wait_timeout_ms;
    }

    let runner = FlowRunner::new(config);
    runner.run().await?;

    Ok(())
}
