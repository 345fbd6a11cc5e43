//! Static build output.
//!
//! Writes everything a static host needs into one directory: the rendered
//! `index.html`, the global stylesheet, and the public assets copied as-is.

use crate::assets::AssetIndex;
use crate::content::Site;
use crate::outline::content_digest;
use crate::render::render_document;
use crate::theme::stylesheet;
use crate::{Error, Result, SiteConfig};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// What a build wrote
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    /// Files written, in write order
    pub files: Vec<PathBuf>,
    /// SHA-256 of the written `index.html`
    pub digest: String,
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Render the site and write it to `config.out_dir`
pub fn build_site(site: &Site, config: &SiteConfig) -> Result<BuildReport> {
    config.validate()?;

    let assets = AssetIndex::scan(&config.public_dir)?;
    let html = render_document(site, &assets, config);
    let digest = content_digest(&html);

    let out_dir = config.out_dir.clone();
    fs::create_dir_all(&out_dir).map_err(|e| Error::io(&out_dir, e))?;

    let mut files = Vec::new();

    let index = out_dir.join("index.html");
    write_file(&index, html.as_bytes())?;
    files.push(index);

    let css_path = out_dir.join(&config.stylesheet);
    write_file(&css_path, stylesheet(&config.palette).as_bytes())?;
    files.push(css_path);

    for name in assets.files() {
        if name == "index.html" || name == config.stylesheet {
            warn!("public asset {} shadows generated output; skipped", name);
            continue;
        }
        let src = config.public_dir.join(name);
        let dst = out_dir.join(name);
        fs::copy(&src, &dst).map_err(|e| Error::io(&src, e))?;
        files.push(dst);
    }

    info!(
        "built {} files into {} (index {})",
        files.len(),
        out_dir.display(),
        &digest[..12]
    );

    Ok(BuildReport {
        out_dir,
        files,
        digest,
    })
}
