//! Domino label sheet generator entry point.
//!
//! Builds the catalog of distinguishable domino faces, samples a sheet's
//! worth of them, lays them out column-major and writes the result as SVG
//! (plus an optional JSON manifest).  Rasterizing and printing are left to
//! external tools.
//!
//! # Usage
//!
//! ```text
//! domino-sheet [OPTIONS]
//!
//! Options:
//!   --config <PATH>           TOML config file [default: domino-sheet.toml if present]
//!   --rows <N>                Dominoes per column
//!   --columns <N>             Dominoes per row
//!   --label-length <MM>       Derive columns from a tape length
//!   --padding <MM>            Margin around the grid
//!   --row-spacing <MM>        Gap between rows
//!   --column-spacing <MM>     Gap between columns
//!   --seed <N>                Fixed seed for a reproducible sheet
//!   -o, --output <PATH>       SVG output path
//!   --manifest <PATH>         JSON manifest output path
//! ```
//!
//! # Precedence
//!
//! CLI flags (or their `DOMINO_*` environment variables) override the config
//! file, which overrides the built-in defaults.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use domino_cli::application::generate_sheet::generate_sheet;
use domino_cli::infrastructure::config::{load_config, AppConfig, DEFAULT_CONFIG_FILE};
use domino_cli::infrastructure::output::{write_manifest, write_svg};
use domino_core::print::{mm_to_pixels, DEFAULT_DPI, PRINTABLE_HEIGHT_PX};
use domino_core::Catalog;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Generate a printable sheet of unique domino labels.
#[derive(Debug, Parser)]
#[command(
    name = "domino-sheet",
    about = "Generate a printable SVG sheet of unique domino labels",
    version
)]
struct Cli {
    /// TOML config file.  Must exist when given explicitly.
    #[arg(long, env = "DOMINO_CONFIG")]
    config: Option<PathBuf>,

    /// Dominoes per column.
    #[arg(long, env = "DOMINO_ROWS")]
    rows: Option<usize>,

    /// Dominoes per row.
    #[arg(long, env = "DOMINO_COLUMNS", conflicts_with = "label_length")]
    columns: Option<usize>,

    /// Tape length in mm; the column count is derived from it.
    #[arg(long, env = "DOMINO_LABEL_LENGTH")]
    label_length: Option<f64>,

    /// Margin around the grid in mm.
    #[arg(long, env = "DOMINO_PADDING")]
    padding: Option<f64>,

    /// Vertical gap between rows in mm.
    #[arg(long, env = "DOMINO_ROW_SPACING")]
    row_spacing: Option<f64>,

    /// Horizontal gap between columns in mm.
    #[arg(long, env = "DOMINO_COLUMN_SPACING")]
    column_spacing: Option<f64>,

    /// Seed for the pattern sampler.  Omit for a fresh random sheet.
    #[arg(long, env = "DOMINO_SEED")]
    seed: Option<u64>,

    /// Path of the SVG document to write.
    #[arg(short, long, env = "DOMINO_OUTPUT")]
    output: Option<PathBuf>,

    /// Path of the JSON manifest to write.
    #[arg(long, env = "DOMINO_MANIFEST")]
    manifest: Option<PathBuf>,
}

impl Cli {
    /// Where to look for the config file and whether it must exist.
    fn config_source(&self) -> (PathBuf, bool) {
        match &self.config {
            Some(path) => (path.clone(), true),
            None => (PathBuf::from(DEFAULT_CONFIG_FILE), false),
        }
    }

    /// Overlays the flags that were given onto `config`.
    fn apply_to(self, mut config: AppConfig) -> AppConfig {
        let sheet = &mut config.sheet;
        if let Some(rows) = self.rows {
            sheet.rows = rows;
        }
        if let Some(columns) = self.columns {
            sheet.columns = columns;
            sheet.label_length = None;
        }
        if let Some(length) = self.label_length {
            sheet.label_length = Some(length);
        }
        if let Some(padding) = self.padding {
            sheet.padding = padding;
        }
        if let Some(spacing) = self.row_spacing {
            sheet.row_spacing = spacing;
        }
        if let Some(spacing) = self.column_spacing {
            sheet.column_spacing = spacing;
        }
        if self.seed.is_some() {
            sheet.seed = self.seed;
        }
        if let Some(output) = self.output {
            config.output.svg = output;
        }
        if self.manifest.is_some() {
            config.output.manifest = self.manifest;
        }
        config
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (config_path, must_exist) = cli.config_source();
    let config = load_config(&config_path, must_exist)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let config = cli.apply_to(config);

    // `RUST_LOG` wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .init();

    run(&config)
}

/// Generates one sheet and writes the configured outputs.
fn run(config: &AppConfig) -> anyhow::Result<()> {
    let spec = config.sheet.grid_spec();
    if let Some(length) = config.sheet.label_length {
        info!(label_length_mm = length, columns = spec.columns, "derived column count from label length");
    }

    let catalog = Catalog::build();
    info!(available = catalog.len(), requested = ?spec.cell_count(), "pattern catalog ready");

    let mut rng = match config.sheet.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let sheet = generate_sheet(&catalog, spec, &mut rng).context("failed to generate domino sheet")?;

    let height_px = mm_to_pixels(sheet.layout().height(), DEFAULT_DPI);
    if height_px > PRINTABLE_HEIGHT_PX {
        warn!(
            height_px,
            printable_px = PRINTABLE_HEIGHT_PX,
            "sheet is taller than the printable tape width at {DEFAULT_DPI} DPI"
        );
    }

    let document = sheet.to_svg().context("failed to render domino sheet")?;
    write_svg(&document, &config.output.svg)?;

    if let Some(path) = &config.output.manifest {
        write_manifest(&sheet.manifest(), path)?;
    }

    info!(sheet_id = %sheet.id(), "done");
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
