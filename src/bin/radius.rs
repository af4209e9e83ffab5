//! Headless driving-time radius run: same pipeline as the desktop form,
//! driven from flags, with the summary printed to stdout.

use {
    anyhow::{Context, Result, bail},
    clap::Parser,
    drive_radius::{
        Calculator, ProgressEvent, RoutingPreference, RunStage, SharedArgs,
        config::DEFAULT_MAX_MINUTES, data::load_area_records,
    },
    std::{sync::mpsc, thread},
    tokio::runtime::Runtime,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Driving-time radius around an address, without the GUI")]
struct RadiusCli {
    /// Origin address to geocode
    #[arg(long)]
    address: String,

    /// Keep areas reachable within this many minutes
    #[arg(long, default_value_t = DEFAULT_MAX_MINUTES)]
    max_minutes: u32,

    /// Only keep areas in the origin's state
    #[arg(long, default_value_t = false)]
    respect_state: bool,

    /// Query exactly these postal codes instead of a random sample (repeatable)
    #[arg(long = "zip")]
    zips: Vec<String>,

    /// Traffic handling for the distance queries
    #[arg(long, value_enum, default_value_t = RoutingPreference::default())]
    routing: RoutingPreference,

    #[command(flatten)]
    shared: SharedArgs,
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter(None, log::LevelFilter::Warn)
        .filter(Some("drive_radius"), log::LevelFilter::Info)
        .filter(Some("radius"), log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let cli = RadiusCli::parse();

    let Some(api_key) = cli.shared.api_key.clone().filter(|k| !k.trim().is_empty()) else {
        bail!("Please enter your Google Maps API key (--api-key or GOOGLE_MAPS_API_KEY)");
    };
    if cli.address.trim().is_empty() {
        bail!("Please enter an origin address");
    }

    let records = load_area_records(&cli.shared.dataset)?;
    let config = cli
        .shared
        .run_config(api_key, cli.address.trim())
        .with_max_minutes(cli.max_minutes)
        .with_respect_state(cli.respect_state)
        .with_routing_preference(cli.routing)
        .with_explicit_zips(cli.zips.clone());

    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!("Failed to create output dir: {}", config.output_dir.display())
    })?;

    let calculator = Calculator::google(&config, &cli.shared.provider_config())?;
    let rt = Runtime::new().context("Failed to create runtime")?;

    let (tx, rx) = mpsc::channel();
    let reporter = thread::spawn(move || {
        while let Ok(event) = rx.recv() {
            match event {
                ProgressEvent::Stage(stage) if stage != RunStage::Done => log::info!("{}", stage),
                ProgressEvent::Batch {
                    completed,
                    total,
                    failed,
                } => log::info!("Batch {}/{} done ({} failed)", completed, total, failed),
                _ => {}
            }
        }
    });

    let result = rt.block_on(calculator.run(&config, &records, Some(&tx)));
    drop(tx);
    let _ = reporter.join();

    let outcome = result?;
    println!("{}", outcome.summary());
    println!("Map: {}", outcome.map_path.display());
    match &outcome.csv_path {
        Some(path) => println!("CSV: {}", path.display()),
        None => println!("CSV: not written (no zip codes in range)"),
    }
    Ok(())
}
