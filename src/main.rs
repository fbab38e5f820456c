use clap::Parser;

use stonekit::cli::{Cli, Command};
use stonekit::commands::{inspect, load_config};
use stonekit::init_logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity.tracing_level_filter())?;
    tracing::debug!("stonekit {} (built {})", stonekit::VERSION, stonekit::BUILD_DATE);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Inspect(args) => {
            let inspection = inspect(&args.design, &config).await?;
            print!("{}", inspection);
        }
        Command::Verify(args) => {
            let inspection = inspect(&args.design, &config).await?;
            for warning in &inspection.warnings {
                eprintln!("{}", warning);
            }
            if !inspection.is_complete() {
                std::process::exit(1);
            }
            println!("{}: all assets reachable", inspection.source);
        }
    }

    Ok(())
}
