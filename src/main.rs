//! Minimap demo driver.
//!
//! Runs a scripted interaction scenario against the simulated widget
//! backend and prints the resulting view states, so the synchronization
//! behavior can be observed without a real map runtime.

use clap::Parser;
use minimap::config;
use minimap::model::LatLng;
use minimap::overview::Overview;
use minimap::widget::sim::{SimFactory, SimView};
use minimap::widget::{MapEvent, MapView};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Overview-map inset synchronizer - scripted demo against a simulated
/// widget backend
#[derive(Parser, Debug)]
#[command(name = "minimap")]
#[command(version)]
#[command(about = "Run a scripted overview-map synchronization scenario")]
pub struct Args {
    /// Path to configuration file (defaults to the platform config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Path to the log file (defaults to the platform state dir)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration: file (if any) merged over hard-coded defaults.
    let config_path = args.config.unwrap_or_else(config::default_config_path);
    let overlay = config::load_file(&config_path)?;
    let overview_config = config::resolve(overlay)?;

    let log_path = args.log_file.unwrap_or_else(minimap::logging::default_log_path);
    minimap::logging::init(&log_path)?;

    info!(config = ?overview_config, "configuration resolved");

    // Host map over Galway at zoom 14, as a real embedding would hand us.
    let factory = SimFactory::new();
    let mut host = SimView::new(LatLng::new(53.2762, -9.0551), 14);
    let mut overview = Overview::new(factory.clone(), host.clone(), overview_config);

    overview.attach()?;
    let t0 = Instant::now();
    overview.handle_event(MapEvent::InsetReady, t0);

    println!("attached: inset at zoom {} centered {}",
        overview.inset_view().map(MapView::zoom).unwrap_or_default(),
        overview.inset_view().map(MapView::center).unwrap_or(LatLng::new(0.0, 0.0)),
    );

    // The user pans the host; the inset follows.
    host.set_center(LatLng::new(53.30, -9.10));
    overview.handle_event(MapEvent::HostDrag, t0);
    println!("host panned: inset center {}",
        overview.inset_view().map(MapView::center).unwrap_or(LatLng::new(0.0, 0.0)));

    // The user zooms the host in; the inset mirrors at the offset.
    host.set_zoom(16);
    overview.handle_event(MapEvent::HostZoomChanged, t0);
    println!("host zoomed to 16: inset zoom {}",
        overview.inset_view().map(MapView::zoom).unwrap_or_default());

    // The user drags the bounds rectangle north-east, then releases.
    if let Some(start) = overview.rectangle_bounds() {
        let grab = start.center();
        overview.handle_event(MapEvent::RectMouseDown { pointer: grab }, t0);
        overview.handle_event(
            MapEvent::RectMouseMove {
                pointer: grab.offset_by(0.05, 0.05),
            },
            t0 + Duration::from_millis(60),
        );
        overview.handle_event(MapEvent::RectMouseUp, t0 + Duration::from_millis(120));
        println!(
            "rectangle dragged: both views recentered on {}",
            host.center()
        );
    }

    // Collapse and restore the inset.
    overview.handle_event(MapEvent::ToggleClicked, t0);
    overview.handle_event(MapEvent::ToggleClicked, t0);
    println!(
        "toggled twice: inset visible = {}",
        overview.inset_view().map(SimView::is_visible).unwrap_or_default()
    );

    info!("scenario complete");
    Ok(())
}
