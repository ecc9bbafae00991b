use crate::types::Capacity;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Layout parameters for a single render, fully enumerated (no dynamic
/// key/value context).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfig {
    /// Panel rows per page.
    pub rows: u32,
    /// Panel columns per page.
    pub columns: u32,
    pub orientation: Orientation,
    /// CSS dimension around each page, e.g. ".25in".
    pub page_padding: String,
    /// CSS dimension around each panel, e.g. ".0625in".
    pub panel_padding: String,
    /// Blank leaves inserted before the first and after the last image.
    pub flyleaves: u32,
    /// Which face of double-sided sheets this run lays out.
    pub side: PageSide,
    /// Document title. Empty renders an empty `<title>`.
    pub title: String,
    /// Footer text repeated on every printed page. Empty omits the footer.
    pub footer: String,
    /// CSS filter applied to every image, e.g. "grayscale(1)". Empty omits it.
    pub image_filter: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 2,
            orientation: Orientation::default(),
            page_padding: ".25in".to_string(),
            panel_padding: ".0625in".to_string(),
            flyleaves: 0,
            side: PageSide::default(),
            title: String::new(),
            footer: String::new(),
            image_filter: String::new(),
        }
    }
}

impl LayoutConfig {
    /// Panels per page. Fails when rows × columns is zero.
    pub fn capacity(&self) -> Result<Capacity, ConfigError> {
        Capacity::try_new(self.rows as usize * self.columns as usize).map_err(|_| {
            ConfigError::DegenerateCapacity {
                rows: self.rows,
                columns: self.columns,
            }
        })
    }

    /// Page width for the configured orientation (US letter).
    pub fn page_width(&self) -> &'static str {
        match self.orientation {
            Orientation::Portrait => "8.5in",
            Orientation::Landscape => "11in",
        }
    }

    /// Page height for the configured orientation (US letter).
    pub fn page_height(&self) -> &'static str {
        match self.orientation {
            Orientation::Portrait => "11in",
            Orientation::Landscape => "8.5in",
        }
    }
}

/// Print orientation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Portrait => write!(f, "portrait"),
            Orientation::Landscape => write!(f, "landscape"),
        }
    }
}

impl FromStr for Orientation {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            other => Err(ConfigError::InvalidOrientation(other.to_string())),
        }
    }
}

/// Which face of double-sided sheets a run lays out. `Back` emits pages in
/// reverse order with right-to-left flow so fronts and backs line up after
/// printing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSide {
    #[default]
    Front,
    Back,
}

impl PageSide {
    /// CSS direction for the rendered document.
    pub fn direction(&self) -> &'static str {
        match self {
            PageSide::Front => "ltr",
            PageSide::Back => "rtl",
        }
    }
}

impl fmt::Display for PageSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSide::Front => write!(f, "front"),
            PageSide::Back => write!(f, "back"),
        }
    }
}

impl FromStr for PageSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(PageSide::Front),
            "back" => Ok(PageSide::Back),
            other => Err(ConfigError::InvalidPageSide(other.to_string())),
        }
    }
}

/// Errors from invalid layout parameters.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("rows x columns must be at least 1, got {rows} x {columns}")]
    DegenerateCapacity { rows: u32, columns: u32 },

    #[error("invalid orientation {0:?}, expected \"portrait\" or \"landscape\"")]
    InvalidOrientation(String),

    #[error("invalid side {0:?}, expected \"front\" or \"back\"")]
    InvalidPageSide(String),
}
