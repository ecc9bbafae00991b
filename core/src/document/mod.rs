//! Assembles scanned filenames into a renderable page/panel structure.

use crate::layout;
use crate::scan;
use crate::types::{Capacity, LayoutConfig, PageSide};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// One cell of a printed grid. `filename` is `None` for flyleaves and for
/// tail slots past the end of the image sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Panel {
    /// 1-based position in the panelized output.
    pub id: usize,
    pub filename: Option<String>,
    /// 0-based page the panel lands on.
    pub page: usize,
}

/// One sheet of `rows × columns` panels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Page {
    /// 0-based page index. Stable under back-side reversal so front and back
    /// sheets pair up.
    pub index: usize,
    pub panels: Vec<Panel>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    pub pages: Vec<Page>,
    /// Total panel slots, empties included.
    pub panel_count: usize,
    pub page_count: usize,
}

/// Scans `directory` for images with `extension` and lays them out according
/// to `config`.
pub fn build_document(
    directory: &Path,
    extension: &str,
    config: &LayoutConfig,
) -> crate::Result<Document> {
    let capacity = config.capacity()?;
    let filenames = scan::scan_directory(directory, extension)?;

    let document = assemble(filenames, config, capacity);
    debug!(
        pages = document.page_count,
        panels = document.panel_count,
        "assembled document"
    );
    Ok(document)
}

fn assemble(filenames: Vec<String>, config: &LayoutConfig, capacity: Capacity) -> Document {
    let flyleaves = config.flyleaves as usize;

    let mut items: Vec<Option<String>> = Vec::with_capacity(filenames.len() + 2 * flyleaves);
    items.extend(std::iter::repeat_with(|| None).take(flyleaves));
    items.extend(filenames.into_iter().map(Some));
    items.extend(std::iter::repeat_with(|| None).take(flyleaves));

    let slots = layout::panelize(items, capacity);
    let panel_count = slots.len();

    let panels: Vec<Panel> = slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| Panel {
            id: position + 1,
            filename: slot.flatten(),
            page: layout::page_index(position, capacity),
        })
        .collect();

    let mut pages: Vec<Page> = layout::paginate(panels, capacity)
        .into_iter()
        .enumerate()
        .map(|(index, panels)| Page { index, panels })
        .collect();

    if config.side == PageSide::Back {
        pages.reverse();
    }

    let page_count = pages.len();
    Document {
        pages,
        panel_count,
        page_count,
    }
}
