use anyhow::Context;
use clap::{Parser, Subcommand};
use labfolio::{build_site, render_document, AssetIndex, PageOutline, Site, SiteConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "labfolio", version, about = "Render the lab portfolio page")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write index.html, the stylesheet and public assets to the output directory
    Build {
        #[arg(long, default_value = "dist")]
        out: PathBuf,
        #[arg(long, default_value = "public")]
        public: PathBuf,
        /// Leave out the utility CSS runtime script
        #[arg(long)]
        no_cdn: bool,
    },
    /// Serve a live preview of the page
    #[cfg(feature = "preview")]
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
        #[arg(long, default_value = "public")]
        public: PathBuf,
    },
    /// Print the structure of the rendered page
    Outline {
        #[arg(long)]
        json: bool,
        #[arg(long, default_value = "public")]
        public: PathBuf,
        /// Leave out the utility CSS runtime script
        #[arg(long)]
        no_cdn: bool,
    },
    /// Print the page content as JSON
    Content,
}

fn print_outline(outline: &PageOutline) {
    println!("Title: {}", outline.title);
    for s in &outline.sections {
        println!("  #{:<12} {}", s.id, s.heading);
    }
    println!("Projects:");
    for p in &outline.projects {
        println!("  {} ({} tiles)", p.title, p.tiles.len());
    }
    println!("Screenshots: {}", outline.screenshots.join(", "));
    println!("Guides:");
    for g in &outline.guides {
        println!("  {}", g);
    }
}

/// Config shared by the commands that render the page
fn site_config(out_dir: PathBuf, public_dir: PathBuf, no_cdn: bool) -> SiteConfig {
    let mut config = SiteConfig {
        out_dir,
        public_dir,
        ..Default::default()
    };
    if no_cdn {
        config.utility_cdn = None;
    }
    config
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let site = Site::portfolio();

    match cli.command {
        Command::Build {
            out,
            public,
            no_cdn,
        } => {
            let config = site_config(out, public, no_cdn);
            let report = build_site(&site, &config).context("build failed")?;
            for f in &report.files {
                println!("{}", f.display());
            }
            println!("index digest: {}", report.digest);
        }
        #[cfg(feature = "preview")]
        Command::Serve { addr, public } => {
            let config = SiteConfig {
                bind_addr: addr,
                public_dir: public,
                ..Default::default()
            };
            let server = labfolio::serve::PreviewServer::bind(site, config)
                .context("failed to start preview server")?;
            server.run()?;
        }
        Command::Outline {
            json,
            public,
            no_cdn,
        } => {
            let config = site_config(PathBuf::from("dist"), public, no_cdn);
            config.validate()?;
            let assets = AssetIndex::scan(&config.public_dir)?;
            let html = render_document(&site, &assets, &config);
            let outline = PageOutline::parse(&html)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outline)?);
            } else {
                print_outline(&outline);
            }
        }
        Command::Content => {
            println!("{}", serde_json::to_string_pretty(&site)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_accepts_public_dir_and_no_cdn() {
        let cli = Cli::try_parse_from(["labfolio", "outline", "--public", "shots", "--no-cdn"])
            .expect("parse");
        match cli.command {
            Command::Outline {
                json,
                public,
                no_cdn,
            } => {
                assert!(!json);
                let config = site_config(PathBuf::from("dist"), public, no_cdn);
                assert_eq!(config.public_dir, PathBuf::from("shots"));
                assert!(config.utility_cdn.is_none());
            }
            _ => panic!("expected outline command"),
        }
    }

    #[test]
    fn outline_defaults_match_build() {
        let cli = Cli::try_parse_from(["labfolio", "outline"]).expect("parse");
        match cli.command {
            Command::Outline { public, no_cdn, .. } => {
                assert_eq!(public, PathBuf::from("public"));
                assert!(!no_cdn);
            }
            _ => panic!("expected outline command"),
        }
    }
}
