use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use log::warn;
use std::io::{self, Write};
use std::process::ExitCode;
use wifisurvey::{
    cli, config, table,
    wifi::{PlatformDriver, WlanDriver, WlanSession},
};

/// Survey nearby Wi-Fi networks by band, channel and signal strength
#[derive(Parser, Debug)]
#[command(
    name = "wifisurvey",
    about = "Scans for visible Wi-Fi networks and prints them by band, channel and strength.",
    long_about = None,
    version = env!("CARGO_PKG_VERSION"),
    disable_version_flag = true
)]
struct Args {
    /// Print version information
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    version: (),

    /// Scan on this adapter index instead of prompting
    #[arg(short, long, value_name = "INDEX")]
    adapter: Option<usize>,

    /// Log scan progress to stderr
    #[arg(long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        config::VERBOSE_LOG_FILTER
    } else {
        config::DEFAULT_LOG_FILTER
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

fn survey<D: WlanDriver>(driver: D, args: &Args) -> Result<()> {
    let session = WlanSession::open(driver)?;
    let adapters = session.enumerate_adapters()?;

    let mut input = io::stdin().lock();
    let mut out = io::stdout().lock();
    cli::print_adapters(&adapters, &mut out)?;
    let index = cli::select_adapter(&adapters, args.adapter, &mut input, &mut out)?;

    let mut networks = session.enumerate_networks(&adapters[index])?;
    for entry in &networks {
        if let Err(e) = &entry.channel {
            warn!("{} ({}): {e}", entry.network.ssid_lossy(), entry.network.signal_strength_dbm);
        }
    }

    table::sort_networks(&mut networks);
    write!(out, "{}", table::render_table(&networks))?;
    out.flush()?;
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    color_eyre::install()?;

    let driver = PlatformDriver::default();
    match tokio::task::spawn_blocking(move || survey(driver, &args)).await {
        Ok(inner) => inner,
        Err(e) => Err(eyre!(e.to_string())),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Fatal exception: {e}");
            ExitCode::FAILURE
        }
    }
}
