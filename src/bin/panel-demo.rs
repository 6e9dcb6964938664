use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use winit::event_loop::{ControlFlow, EventLoop};

use panel_runtime::app::{App, RuntimeConfig};
use panel_runtime::{build_info, health};

/// Nine-slice panel demo
#[derive(Parser, Debug)]
#[command(name = "panel-demo", version)]
struct Args {
    /// Config profile to load (defaults to APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Run the health checks, print the report and exit
    #[arg(long)]
    health: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    if args.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        if report.has_warnings() {
            warn!(warned = report.warned, "Health checks finished with warnings");
        }
        std::process::exit(report.exit_code());
    }

    info!(version = %build_info::version_string(), "panel-demo");

    let mut app = match args.profile {
        Some(profile) => App::new(RuntimeConfig::load(&profile)?)?,
        None => App::from_env()?,
    };

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    event_loop.run_app(&mut app)?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, fmt};
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
