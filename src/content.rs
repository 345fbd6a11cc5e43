//! Fixed page content.
//!
//! Everything the page shows is authored here as constant data. The renderer
//! reads it once per render and never mutates it.

use serde::Serialize;

/// A project card: title, description and the image references shown in its
/// tile grid, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub images: &'static [&'static str],
}

/// An outbound link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Identity and contact details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    /// Text of the identity mark in the header
    pub initials: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub email: &'static str,
    /// Links listed in the contact aside
    pub links: &'static [Link],
    /// Handle link repeated in the contact section
    pub handle: Link,
}

/// The about block with its highlights list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct About {
    pub heading: &'static str,
    pub body: &'static str,
    pub highlights: &'static [&'static str],
}

/// A sentence with one inline code fragment, rendered as
/// `before<code>code</code>after`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CodeNote {
    pub before: &'static str,
    pub code: &'static str,
    pub after: &'static str,
}

/// All content of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Site {
    pub page_title: &'static str,
    pub meta_description: &'static str,
    pub profile: Profile,
    pub about: About,
    pub projects: &'static [Project],
    pub screenshots_intro: CodeNote,
    /// Labels of the placeholder tiles in the screenshots region
    pub screenshots: &'static [&'static str],
    pub docs_intro: &'static str,
    /// Guide file names listed in the documentation region
    pub guides: &'static [&'static str],
}

impl Site {
    /// The published portfolio
    pub fn portfolio() -> Self {
        PORTFOLIO
    }

    /// Total number of image tiles across all project cards
    pub fn project_tile_count(&self) -> usize {
        self.projects.iter().map(|p| p.images.len()).sum()
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::portfolio()
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Active Directory Deep Dive",
        description: "Multi-DC domain, OU design, GPOs, password policies, replication and SYSVOL management.",
        images: &["placeholder.png", "placeholder.png"],
    },
    Project {
        title: "Azure Hybrid Identity",
        description: "Azure AD Connect installation, Password Hash Sync, OU filtering, and user sync into Entra ID.",
        images: &["placeholder.png"],
    },
    Project {
        title: "WDS + PXE Deployment",
        description: "Boot and install images configured for PXE booting virtual clients for rapid imaging.",
        images: &["placeholder.png"],
    },
];

pub const HIGHLIGHTS: &[&str] = &[
    "AD DS: multi-DC, replication, GPOs",
    "Azure: Entra ID sync via Azure AD Connect",
    "WDS/PXE: automated imaging",
    "Backups, monitoring, and basic hardening",
];

pub const SCREENSHOTS: &[&str] = &[
    "AD DS Dashboard",
    "Azure AD Connect",
    "GPO Applied",
    "WDS Boot",
    "Backup Completed",
    "PerfMon Graph",
];

pub const GUIDES: &[&str] = &[
    "01-introduction.md",
    "02-prerequisites.md",
    "03-installation-and-setup.md",
    "04-domain-and-dns-configuration.md",
    "05-password-hash-and-ou-filtering.md",
    "06-user-and-device-management.md",
    "07-troubleshooting.md",
];

pub const PROFILE: Profile = Profile {
    initials: "BI",
    name: "Bright Iwara",
    tagline: "Securing infrastructure, enabling productivity across hybrid environments.",
    email: "ernestbrightiwara@oytlook.com",
    links: &[
        Link { label: "GitHub", href: "#" },
        Link { label: "LinkedIn", href: "#" },
    ],
    handle: Link {
        label: "github.com/yourusername",
        href: "#",
    },
};

pub const ABOUT: About = About {
    heading: "About this lab",
    body: "This repository documents a full enterprise-style Windows Server environment integrated with Microsoft Azure. It contains step-by-step guides, configuration notes, troubleshooting logs, and screenshot evidence. Use the Projects section below to navigate to each documented lab.",
    highlights: HIGHLIGHTS,
};

pub const PORTFOLIO: Site = Site {
    page_title: "Bright Iwara — Systems & Infrastructure",
    meta_description: "Bright Iwara — Systems Administrator portfolio: AD, Azure, Networking, Security",
    profile: PROFILE,
    about: ABOUT,
    projects: PROJECTS,
    screenshots_intro: CodeNote {
        before: "Add your screenshot images inside the ",
        code: "/public",
        after: " folder and they will appear below.",
    },
    screenshots: SCREENSHOTS,
    docs_intro: "This site is backed by a set of markdown guides (in the GitHub repo). The guides include step-by-step commands and exported configs.",
    guides: GUIDES,
};
