// Weekly Countdown
// Main entry point

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tokio::sync::watch;

use weekly_countdown::models::ui::FragmentRoute;
use weekly_countdown::services::clock::SystemClock;
use weekly_countdown::services::fragment::FragmentLoader;
use weekly_countdown::services::refresh::{ConsoleDisplay, RefreshLoop};
use weekly_countdown::services::settings::{build_countdowns, refresh_interval, SettingsService};

#[derive(Parser)]
#[command(
    name = "weekly-countdown",
    about = "Countdown to recurring weekly events",
    version
)]
struct Cli {
    /// Settings file (default: $WEEKLY_COUNTDOWN_CONFIG, then the user config dir)
    config: Option<PathBuf>,
    /// Print every countdown once and exit
    #[arg(long)]
    once: bool,
    /// Print one JSON object per countdown instead of plain text
    #[arg(long)]
    json: bool,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch and print the fragment named by a location hash
    Fragment {
        /// Location hash, e.g. #content:intro
        hash: String,
    },
    /// Fetch footer, banner and categories, plus an optional hash route
    Fragments {
        /// Location hash, e.g. #content:intro
        hash: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let settings_service = SettingsService::locate(cli.config.as_deref())?;
    let settings = settings_service.load()?;
    let base_url = settings.fragment_base_url.as_deref();

    match cli.command {
        Some(Command::Fragment { hash }) => return print_fragment(base_url, &hash),
        Some(Command::Fragments { hash }) => {
            return print_page_fragments(base_url, hash.as_deref());
        }
        None => {}
    }

    let countdowns = build_countdowns(&settings)?;
    log::info!("Starting Weekly Countdown with {} event(s)", countdowns.len());

    let display = ConsoleDisplay::stdout(cli.json);
    let mut refresh = RefreshLoop::new(countdowns, SystemClock, display)
        .with_interval(refresh_interval(&settings));

    if cli.once {
        refresh.tick();
        return Ok(());
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    runtime.block_on(async move {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::info!("Ctrl-C received, stopping");
                let _ = shutdown_tx.send(true);
            }
        });
        refresh.run(shutdown_rx, None).await;
    });

    Ok(())
}

fn parse_route(hash: &str) -> Result<FragmentRoute> {
    FragmentRoute::from_hash(hash).with_context(|| format!("{hash} is not a #target:page hash"))
}

fn fragment_loader(base_url: Option<&str>) -> Result<FragmentLoader> {
    let base_url = base_url.context("fragment_base_url is not set in settings")?;
    FragmentLoader::new(base_url)
}

/// Fetch and print the fragment named by `hash` (blocking, outside the runtime).
fn print_fragment(base_url: Option<&str>, hash: &str) -> Result<()> {
    let route = parse_route(hash)?;
    let loader = fragment_loader(base_url)?;
    match loader.fetch(&route)? {
        Some(body) => println!("{body}"),
        None => bail!("fragment {route} is not available"),
    }
    Ok(())
}

/// Fetch every fragment a page load pulls in and print each under its target.
fn print_page_fragments(base_url: Option<&str>, hash: Option<&str>) -> Result<()> {
    let hash_route = hash.map(parse_route).transpose()?;
    let loader = fragment_loader(base_url)?;
    let routes = FragmentLoader::page_fragments(hash_route);

    for (route, body) in loader.fetch_all(&routes)? {
        println!("==> {} <==", route.target);
        println!("{body}");
    }
    Ok(())
}
