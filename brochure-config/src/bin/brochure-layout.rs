//! Print the resolved carousel layout for a configured page.

use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result, bail};
use brochure_config::{ConfigSource, SiteConfig, validate};
use brochure_core::carousel::OffsetMode;
use brochure_core::{
    CarouselController, CarouselKey, HeadlessSurface, Viewport,
};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "brochure-layout",
    about = "Preview how a page's carousels lay out per device class"
)]
struct Cli {
    /// Site config file (TOML or JSON). Defaults to the environment lookup.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Page whose carousel settings to use
    #[arg(long, default_value = "products")]
    page: String,
    /// Viewport width in px; omit to show one row per device class
    #[arg(long)]
    width: Option<f32>,
    #[arg(long, default_value_t = 800.0)]
    height: f32,
    /// Cards in the track
    #[arg(long, default_value_t = 8)]
    items: usize,
    /// Horizontal page padding subtracted from the viewport width
    #[arg(long, default_value_t = 16.0)]
    padding: f32,
    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct LayoutRow {
    width: f32,
    device: String,
    visible_count: f32,
    item_width: f32,
    stride: f32,
    max_index: usize,
    offset_mode: &'static str,
    auto_play: bool,
}

/// One phone, one tablet, one desktop.
const SAMPLE_WIDTHS: [f32; 3] = [390.0, 820.0, 1440.0];

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let (config, source) = match &cli.config {
        Some(path) => (
            SiteConfig::load_from_file(path)?,
            ConfigSource::File(path.clone()),
        ),
        None => SiteConfig::load_from_env()?,
    };
    let warnings = validate(&config).context("site config rejected")?;
    warnings.emit();
    tracing::info!("using site config from {source:?}");

    let Some(page) = config.page(&cli.page) else {
        let known: Vec<&str> =
            config.pages.iter().map(|p| p.name.as_str()).collect();
        bail!("unknown page '{}'; known pages: {}", cli.page, known.join(", "));
    };
    let carousel_config = config.carousel_config(page);

    let widths: Vec<f32> = match cli.width {
        Some(width) => vec![width],
        None => SAMPLE_WIDTHS.to_vec(),
    };

    let now = Instant::now();
    let rows: Vec<LayoutRow> = widths
        .into_iter()
        .map(|width| {
            let viewport = Viewport::new(width, cli.height);
            let container = (width - 2.0 * cli.padding).max(0.0);
            let mut controller = CarouselController::new(
                CarouselKey::new("preview"),
                Some(HeadlessSurface::new(cli.items, container)),
                carousel_config,
                viewport,
                now,
            );
            let row = LayoutRow {
                width,
                device: controller.device_class().to_string(),
                visible_count: controller.visible_count(),
                item_width: controller.item_extent(),
                stride: controller.state().stride(),
                max_index: controller.max_index(),
                offset_mode: match OffsetMode::for_class(controller.device_class()) {
                    OffsetMode::Transform => "transform",
                    OffsetMode::Scroll => "scroll",
                },
                auto_play: controller.is_auto_playing(),
            };
            controller.shutdown();
            row
        })
        .collect();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "page '{}' ({} carousels), {} items",
        page.name,
        page.carousels.len(),
        cli.items
    );
    println!(
        "{:>7}  {:<8} {:>7} {:>9} {:>8} {:>5}  {:<9} {}",
        "width", "device", "visible", "item_px", "stride", "max", "mode", "auto"
    );
    for row in &rows {
        println!(
            "{:>7.0}  {:<8} {:>7.2} {:>9.1} {:>8.1} {:>5}  {:<9} {}",
            row.width,
            row.device,
            row.visible_count,
            row.item_width,
            row.stride,
            row.max_index,
            row.offset_mode,
            if row.auto_play { "on" } else { "off" }
        );
    }
    Ok(())
}
