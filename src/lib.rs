//! Labfolio
//!
//! Renders a single-page portfolio for an infrastructure lab: header, about
//! block with highlights, project cards, screenshot tiles, the list of
//! markdown guides and a contact section. All content is compile-time
//! constant data (see [`content`]); rendering is a pure function of it.
//!
//! # Features
//!
//! - **Deterministic rendering**: same content, same bytes
//! - **Placeholder tiles**: image references render as labelled boxes until a
//!   real file with that name is dropped into the public directory
//! - **Static output**: `index.html`, a stylesheet and the public assets,
//!   ready for any static host
//! - **Preview** (default feature `preview`): a small local HTTP server
//!
//! # Example
//!
//! ```
//! use labfolio::{render_document, AssetIndex, Site, SiteConfig};
//!
//! let html = render_document(&Site::portfolio(), &AssetIndex::empty(), &SiteConfig::default());
//! assert!(html.contains("Active Directory Deep Dive"));
//! ```

use std::path::PathBuf;

pub mod error;
pub use error::{Error, Result};

pub mod assets;
pub mod build;
pub mod content;
pub mod outline;
pub mod render;
pub mod theme;

// Local preview server
#[cfg(feature = "preview")]
pub mod serve;

pub use assets::AssetIndex;
pub use build::{build_site, BuildReport};
pub use content::{Project, Site};
pub use outline::{content_digest, PageOutline};
pub use render::{render_document, render_page};
pub use theme::Palette;

/// Configuration for building and previewing the site
///
/// Defaults mirror a conventional static-site layout: assets in `public/`,
/// output in `dist/`, the stylesheet next to `index.html`.
///
/// # Examples
///
/// ```
/// let cfg = labfolio::SiteConfig::default();
/// assert_eq!(cfg.stylesheet, "styles.css");
/// assert!(cfg.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Directory the build writes into
    pub out_dir: PathBuf,
    /// Directory holding real images and other static files
    pub public_dir: PathBuf,
    /// File name of the generated stylesheet
    pub stylesheet: String,
    /// Script URL of the utility CSS runtime, or `None` to omit it
    pub utility_cdn: Option<String>,
    /// Address the preview server binds to
    pub bind_addr: String,
    /// Brand colours
    pub palette: Palette,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            public_dir: PathBuf::from("public"),
            stylesheet: "styles.css".to_string(),
            utility_cdn: Some("https://cdn.tailwindcss.com".to_string()),
            bind_addr: "127.0.0.1:3000".to_string(),
            palette: Palette::default(),
        }
    }
}

impl SiteConfig {
    /// Check the settings that would otherwise produce a broken build
    pub fn validate(&self) -> Result<()> {
        let css = self.stylesheet.as_str();
        if css.trim().is_empty() {
            return Err(Error::ConfigError("stylesheet name is empty".into()));
        }
        if css.contains('/') || css.contains('\\') || css == "." || css == ".." {
            return Err(Error::ConfigError(format!(
                "stylesheet must be a plain file name, got {:?}",
                css
            )));
        }
        if css == "index.html" {
            return Err(Error::ConfigError(
                "stylesheet cannot be named index.html".into(),
            ));
        }
        Ok(())
    }
}
