pub mod document;
pub mod layout;
pub mod render;
pub mod scan;
pub mod types;

pub use document::{Document, Page, Panel, build_document};
pub use render::Renderer;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] types::ConfigError),

    #[error("scan error: {0}")]
    Scan(#[from] scan::ScanError),

    #[error("render error: {0}")]
    Render(#[from] render::RenderError),
}
