use std::io;
use std::time::Duration;

use clap::Parser;

use ticker::banner::{BannerInfo, print_banner};
use ticker::consts::DEFAULT_INTERVAL;
use ticker::driver::drive_until;
use ticker::driver::interval::{IntervalConfig, IntervalDriver};
use ticker::entity::Derived;

#[derive(Parser)]
#[command(
    name = "ticker",
    version,
    about = "Runs a derived entity forever on a fixed interval."
)]
struct Cli {
    /// Pause between runs, in milliseconds
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_INTERVAL.as_millis() as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    interval_ms: u64,

    /// Do not print the startup banner
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let interval = Duration::from_millis(cli.interval_ms);
    let entity = Derived::new();

    if !cli.quiet {
        print_banner(&BannerInfo {
            entity: &entity,
            interval,
        });
    }

    let mut driver =
        IntervalDriver::new(Box::new(entity), io::stdout(), IntervalConfig { interval });
    log::info!(
        "starting {} (age {}), interval {:?}",
        driver.entity().name(),
        driver.entity().age(),
        driver.interval()
    );

    // Ctrl+C is the only way out besides an error or a kill.
    drive_until(&mut driver, tokio::signal::ctrl_c()).await?;
    eprintln!("\ninterrupted");
    log::info!("stopped by Ctrl+C");

    Ok(())
}
