//! Structural properties of the rendered page

use labfolio::content::{Project, Site, PORTFOLIO};
use labfolio::{render_document, AssetIndex, PageOutline, SiteConfig};

fn outline_of(site: &Site, assets: &AssetIndex) -> PageOutline {
    let html = render_document(site, assets, &SiteConfig::default());
    PageOutline::parse(&html).expect("outline")
}

#[test]
fn test_projects_render_in_source_order_with_tile_counts() {
    let outline = outline_of(&Site::portfolio(), &AssetIndex::empty());

    let titles: Vec<_> = outline.projects.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Active Directory Deep Dive",
            "Azure Hybrid Identity",
            "WDS + PXE Deployment"
        ]
    );
    assert_eq!(outline.tile_counts(), vec![2, 1, 1]);
    for project in &outline.projects {
        assert!(project.tiles.iter().all(|t| t == "placeholder.png"));
    }
}

#[test]
fn test_tiles_follow_image_references() {
    const PROJECTS: &[Project] = &[
        Project {
            title: "Empty",
            description: "No images yet",
            images: &[],
        },
        Project {
            title: "Many",
            description: "Five images",
            images: &["a.png", "b.png", "c.png", "d.png", "e.png"],
        },
    ];
    let site = Site {
        projects: PROJECTS,
        ..PORTFOLIO
    };

    let outline = outline_of(&site, &AssetIndex::empty());
    assert_eq!(outline.tile_counts(), vec![0, 5]);
    assert_eq!(
        outline.projects[1].tiles,
        vec!["a.png", "b.png", "c.png", "d.png", "e.png"]
    );
}

#[test]
fn test_fixed_regions() {
    let outline = outline_of(&Site::portfolio(), &AssetIndex::empty());

    assert_eq!(
        outline.screenshots,
        vec![
            "AD DS Dashboard",
            "Azure AD Connect",
            "GPO Applied",
            "WDS Boot",
            "Backup Completed",
            "PerfMon Graph"
        ]
    );
    assert_eq!(
        outline.guides,
        vec![
            "01-introduction.md",
            "02-prerequisites.md",
            "03-installation-and-setup.md",
            "04-domain-and-dns-configuration.md",
            "05-password-hash-and-ou-filtering.md",
            "06-user-and-device-management.md",
            "07-troubleshooting.md"
        ]
    );
    assert_eq!(
        outline.section_ids(),
        vec!["about", "projects", "screenshots", "docs", "contact"]
    );
    assert_eq!(outline.email.as_deref(), Some("ernestbrightiwara@oytlook.com"));
    assert_eq!(outline.title, "Bright Iwara — Systems & Infrastructure");
}

#[test]
fn test_screenshots_ignore_assets() {
    // real project images never turn the screenshot placeholders into images
    let assets = AssetIndex::from_names(["placeholder.png", "AD DS Dashboard"]);
    let html = render_document(&Site::portfolio(), &assets, &SiteConfig::default());
    let outline = PageOutline::parse(&html).unwrap();

    assert_eq!(outline.screenshots.len(), 6);
    assert_eq!(outline.tile_counts(), vec![2, 1, 1]);
    assert_eq!(html.matches("<img src=\"/placeholder.png\"").count(), 4);
    assert!(!html.contains("src=\"/AD DS Dashboard\""));
}

#[test]
fn test_rendering_is_idempotent() {
    let site = Site::portfolio();
    let config = SiteConfig::default();
    let a = render_document(&site, &AssetIndex::empty(), &config);
    let b = render_document(&site, &AssetIndex::empty(), &config);
    assert_eq!(a, b);
    assert_eq!(labfolio::content_digest(&a), labfolio::content_digest(&b));
    assert_eq!(PageOutline::parse(&a).unwrap(), PageOutline::parse(&b).unwrap());
}
