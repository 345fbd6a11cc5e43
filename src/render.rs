//! Page renderer.
//!
//! Turns a [`Site`] into one HTML5 document. Rendering is a pure function of
//! its inputs: the same site, asset index and config always produce the same
//! bytes, and there is no error path.
//!
//! Region order is fixed: header, about + contact aside, projects,
//! screenshots, documentation, contact. Presentation is expressed only as
//! utility class names plus the `.screenshot` and `.project` hooks styled by
//! [`crate::theme::stylesheet`].

use crate::assets::AssetIndex;
use crate::content::{About, CodeNote, Profile, Project, Site};
use crate::theme::utility_config;
use crate::SiteConfig;
use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Render the full document as markup
pub fn render_page(site: &Site, assets: &AssetIndex, config: &SiteConfig) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site.page_title) }
                meta name="description" content=(site.meta_description);
                link rel="stylesheet" href=(config.stylesheet);
                @if let Some(cdn) = config.utility_cdn.as_deref() {
                    script src=(cdn) {}
                    script {
                        (PreEscaped(format!("tailwind.config = {};", utility_config(&config.palette))))
                    }
                }
            }
            body {
                main class="min-h-screen p-6 md:p-12" {
                    div class="mx-auto max-w-6xl" {
                        (header(&site.profile))
                        (summary(&site.about, &site.profile))
                        (projects(site.projects, assets))
                        (screenshots(&site.screenshots_intro, site.screenshots))
                        (docs(site.docs_intro, site.guides))
                        (contact(&site.profile))
                    }
                }
            }
        }
    }
}

/// Render the full document as a string
pub fn render_document(site: &Site, assets: &AssetIndex, config: &SiteConfig) -> String {
    render_page(site, assets, config).into_string()
}

fn header(profile: &Profile) -> Markup {
    html! {
        header class="flex items-center gap-4" {
            div class="w-20 h-20 rounded-lg bg-gradient-to-br from-navy to-brandblue flex items-center justify-center text-white text-2xl font-bold" {
                (profile.initials)
            }
            div {
                h1 class="text-2xl md:text-3xl font-extrabold text-navy" { (profile.name) }
                p class="text-sm text-gray-600 mt-1" { (profile.tagline) }
            }
            div class="ml-auto hidden md:block" {
                a href="#contact" class="inline-block bg-brandblue text-white px-4 py-2 rounded-md font-semibold" { "Contact" }
            }
        }
    }
}

fn summary(about: &About, profile: &Profile) -> Markup {
    html! {
        section id="about" class="mt-8 grid md:grid-cols-3 gap-6" {
            div class="md:col-span-2 bg-white rounded-xl p-6 shadow-sm" {
                h2 class="text-xl font-bold text-navy" { (about.heading) }
                p class="text-gray-600 mt-3" { (about.body) }
                div class="mt-6" {
                    h3 class="font-semibold text-navy" { "Highlights" }
                    ul class="list-disc list-inside text-gray-700 mt-2" {
                        @for item in about.highlights {
                            li { (item) }
                        }
                    }
                }
            }
            aside class="bg-white rounded-xl p-6 shadow-sm" {
                h3 class="font-semibold text-navy" { "Contact" }
                p class="text-gray-700 mt-2" {
                    a href={ "mailto:" (profile.email) } { (profile.email) }
                }
                p class="text-gray-500 text-sm mt-3" { "Links" }
                div class="mt-2 flex gap-2" {
                    @for link in profile.links {
                        a class="text-brandblue hover:underline" href=(link.href) { (link.label) }
                    }
                }
            }
        }
    }
}

fn projects(projects: &[Project], assets: &AssetIndex) -> Markup {
    html! {
        section id="projects" class="mt-10" {
            h2 class="text-xl font-bold text-navy" { "Projects" }
            div class="grid md:grid-cols-3 gap-6 mt-4" {
                @for project in projects {
                    (project_card(project, assets))
                }
            }
        }
    }
}

fn project_card(project: &Project, assets: &AssetIndex) -> Markup {
    html! {
        article class="project bg-white p-4 rounded-lg shadow-sm" {
            h3 class="font-semibold text-navy" { (project.title) }
            p class="text-gray-600 mt-2 text-sm" { (project.description) }
            div class="mt-3 grid grid-cols-2 gap-2" {
                @for image in project.images {
                    (image_tile(image, assets))
                }
            }
        }
    }
}

/// One tile per image reference. Shows the real image when the asset index
/// has it, the reference label otherwise.
fn image_tile(label: &str, assets: &AssetIndex) -> Markup {
    html! {
        div class="screenshot" data-ref=(label) {
            @if let Some(src) = assets.resolve(label) {
                img src=(src) alt=(label);
            } @else {
                (label)
            }
        }
    }
}

fn screenshots(intro: &CodeNote, labels: &[&str]) -> Markup {
    html! {
        section id="screenshots" class="mt-10" {
            h2 class="text-xl font-bold text-navy" { "Screenshots" }
            p class="text-gray-600 mt-2" {
                (intro.before) code { (intro.code) } (intro.after)
            }
            div class="grid md:grid-cols-3 gap-4 mt-4" {
                @for label in labels {
                    div class="screenshot" data-ref=(label) { (label) }
                }
            }
        }
    }
}

fn docs(intro: &str, guides: &[&str]) -> Markup {
    html! {
        section id="docs" class="mt-10" {
            h2 class="text-xl font-bold text-navy" { "Documentation" }
            p class="text-gray-600 mt-2" { (intro) }
            ul class="mt-3 list-disc pl-5 text-gray-700" {
                @for guide in guides {
                    li { (guide) }
                }
            }
        }
    }
}

fn contact(profile: &Profile) -> Markup {
    html! {
        section id="contact" class="mt-10 mb-24" {
            h2 class="text-xl font-bold text-navy" { "Contact" }
            p class="text-gray-700 mt-2" {
                "Email: "
                a href={ "mailto:" (profile.email) } { (profile.email) }
            }
            p class="text-gray-700" {
                "GitHub: "
                a href=(profile.handle.href) class="text-brandblue" { (profile.handle.label) }
            }
        }
    }
}
