//! fanfold - panelized print layouts from image sequences
//!
//! Reorders a folder of sequentially named images into a print-ready
//! `index.html` so that printing the pages double-sided, stacking and
//! cutting them restores reading order.
//!
//! Usage:
//!   fanfold --directory frames/
//!   fanfold --directory frames/ --rows 3 --columns 3 --orientation portrait
//!   fanfold --directory frames/ --flyleaves 2 --side back

use anyhow::{Context, Result};
use clap::Parser;
use fanfold_core::build_document;
use fanfold_core::render::{DEFAULT_TEMPLATE, Renderer};
use fanfold_core::types::{LayoutConfig, Orientation, PageSide};
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "fanfold", version, about = "Panelized print layouts from image sequences")]
struct Args {
    /// Folder of images to lay out; index.html is written here
    #[arg(long)]
    directory: PathBuf,

    /// Panel rows per page
    #[arg(long, default_value_t = 3)]
    rows: u32,

    /// Panel columns per page
    #[arg(long, default_value_t = 2)]
    columns: u32,

    /// Print orientation: "landscape" or "portrait"
    #[arg(long, default_value_t = Orientation::Landscape)]
    orientation: Orientation,

    /// Padding around each page
    #[arg(long = "page_padding", default_value = ".25in")]
    page_padding: String,

    /// Padding around each panel
    #[arg(long = "panel_padding", default_value = ".0625in")]
    panel_padding: String,

    /// Image file extension to include
    #[arg(long, default_value = "png")]
    extension: String,

    /// Blank leaves inserted before the first and after the last image
    #[arg(long, default_value_t = 0)]
    flyleaves: u32,

    /// Sheet side to lay out: "front" or "back"
    #[arg(long, default_value_t = PageSide::Front)]
    side: PageSide,

    /// Document title
    #[arg(long, default_value = "")]
    title: String,

    /// Footer text shown on every page
    #[arg(long, default_value = "")]
    footer: String,

    /// CSS filter applied to every image, e.g. "grayscale(1)"
    #[arg(long = "image_filter", default_value = "")]
    image_filter: String,

    /// Template file overriding the built-in one
    #[arg(long)]
    template: Option<PathBuf>,
}

impl Args {
    fn layout_config(&self) -> LayoutConfig {
        LayoutConfig {
            rows: self.rows,
            columns: self.columns,
            orientation: self.orientation,
            page_padding: self.page_padding.clone(),
            panel_padding: self.panel_padding.clone(),
            flyleaves: self.flyleaves,
            side: self.side,
            title: self.title.clone(),
            footer: self.footer.clone(),
            image_filter: self.image_filter.clone(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = args.layout_config();

    let document = build_document(&args.directory, &args.extension, &config)
        .with_context(|| format!("failed to lay out {}", args.directory.display()))?;

    let template = match &args.template {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read template {}", path.display()))?,
        None => DEFAULT_TEMPLATE.to_string(),
    };

    let renderer = Renderer::new(&template).context("failed to compile template")?;
    let html = renderer
        .render(&document, &config)
        .context("failed to render document")?;

    // Render fully in memory first so a failure never leaves a truncated
    // index.html behind.
    let output_path = args.directory.join("index.html");
    fs::write(&output_path, html)
        .with_context(|| format!("failed to write {}", output_path.display()))?;

    info!(
        pages = document.page_count,
        panels = document.panel_count,
        output = %output_path.display(),
        "wrote layout"
    );
    Ok(())
}
