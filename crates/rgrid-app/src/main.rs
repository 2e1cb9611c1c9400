//! rgrid inspector.
//!
//! Prints the responsive grid layout for each container width given on the
//! command line. `RGRID_CONFIG` points at a TOML or JSON grid configuration
//! and `RGRID_ITEMS` sets the item count. Without widths, one representative
//! width per breakpoint is shown.

use std::path::PathBuf;

use anyhow::{Context, Result};

use rgrid_types::breakpoint::Breakpoint;
use rgrid_ui::{GridConfiguration, GridLayoutEngine};

const DEFAULT_ITEMS: usize = 120;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::var_os("RGRID_CONFIG") {
        Some(path) => GridConfiguration::load(&PathBuf::from(path))?,
        None => GridConfiguration::default(),
    };
    let items = match std::env::var("RGRID_ITEMS") {
        Ok(v) => v
            .parse::<usize>()
            .with_context(|| format!("RGRID_ITEMS is not an item count: {v}"))?,
        Err(_) => DEFAULT_ITEMS,
    };

    let widths = parse_widths(std::env::args().skip(1))?;
    let widths = if widths.is_empty() {
        Breakpoint::ALL.iter().map(|bp| bp.range().low).collect()
    } else {
        widths
    };

    log::info!(
        "Inspecting {items} items at {} widths (padding {}, column spacing {})",
        widths.len(),
        config.padding,
        config.column_spacing,
    );

    let engine = GridLayoutEngine::default();
    for width in widths {
        let result = engine
            .layout(items, width, &config)
            .with_context(|| format!("layout failed at width {width}"))?;
        println!(
            "width {width:>8.1}  {:<3}  columns {:>2}  cell {:>8.2}  rows {:>4}",
            result.breakpoint,
            result.column_count,
            result.cell_width,
            result.row_count(),
        );
    }

    Ok(())
}

fn parse_widths(args: impl Iterator<Item = String>) -> Result<Vec<f32>> {
    args.map(|arg| {
        arg.parse::<f32>()
            .with_context(|| format!("not a container width: {arg}"))
    })
    .collect()
}
