//! Structural outline of a rendered page.
//!
//! Parses rendered HTML back into the handful of facts worth checking: which
//! regions exist, which project cards were emitted and what tiles each holds.
//! Used by the `outline` command and by the integration tests.

use crate::{Error, Result};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// One rendered project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectOutline {
    pub title: String,
    /// `data-ref` label of each tile, in document order
    pub tiles: Vec<String>,
}

/// A rendered region: its `id` and heading text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionOutline {
    pub id: String,
    pub heading: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageOutline {
    pub title: String,
    pub sections: Vec<SectionOutline>,
    pub projects: Vec<ProjectOutline>,
    pub screenshots: Vec<String>,
    pub guides: Vec<String>,
    pub email: Option<String>,
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Outline(format!("bad selector {:?}: {:?}", css, e)))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

fn tile_refs(scope: ElementRef<'_>, tile_sel: &Selector) -> Vec<String> {
    scope
        .select(tile_sel)
        .map(|t| t.value().attr("data-ref").map(str::to_string).unwrap_or_else(|| text_of(t)))
        .collect()
}

impl PageOutline {
    /// Extract the outline from a rendered document
    pub fn parse(html: &str) -> Result<Self> {
        let document = Html::parse_document(html);

        let title_sel = selector("title")?;
        let section_sel = selector("section[id]")?;
        let heading_sel = selector("h2")?;
        let article_sel = selector("#projects article")?;
        let article_title_sel = selector("h3")?;
        let tile_sel = selector(".screenshot")?;
        let shots_sel = selector("#screenshots")?;
        let guide_sel = selector("#docs li")?;
        let mail_sel = selector("a[href^=\"mailto:\"]")?;

        let title = document
            .select(&title_sel)
            .next()
            .map(text_of)
            .unwrap_or_default();

        let sections = document
            .select(&section_sel)
            .map(|s| SectionOutline {
                id: s.value().attr("id").unwrap_or_default().to_string(),
                heading: s.select(&heading_sel).next().map(text_of).unwrap_or_default(),
            })
            .collect();

        let projects = document
            .select(&article_sel)
            .map(|a| ProjectOutline {
                title: a
                    .select(&article_title_sel)
                    .next()
                    .map(text_of)
                    .unwrap_or_default(),
                tiles: tile_refs(a, &tile_sel),
            })
            .collect();

        let screenshots = document
            .select(&shots_sel)
            .next()
            .map(|s| tile_refs(s, &tile_sel))
            .unwrap_or_default();

        let guides = document.select(&guide_sel).map(text_of).collect();

        let email = document.select(&mail_sel).next().map(text_of);

        Ok(Self {
            title,
            sections,
            projects,
            screenshots,
            guides,
            email,
        })
    }

    /// Section ids in document order
    pub fn section_ids(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.id.as_str()).collect()
    }

    /// Tile count of each project card, in document order
    pub fn tile_counts(&self) -> Vec<usize> {
        self.projects.iter().map(|p| p.tiles.len()).collect()
    }
}

/// SHA-256 hex digest of a rendered document
pub fn content_digest(html: &str) -> String {
    hex::encode(Sha256::digest(html.as_bytes()))
}
