//! Local preview server.
//!
//! Serves the page the way a static host would, but renders it fresh on every
//! request and rescans the public directory, so edits to content or dropped-in
//! screenshots show up on reload. Not meant for production hosting.

use crate::assets::AssetIndex;
use crate::content::Site;
use crate::render::render_document;
use crate::theme::stylesheet;
use crate::{Error, Result, SiteConfig};
use log::{info, warn};
use percent_encoding::percent_decode_str;
use std::net::SocketAddr;
use std::sync::Arc;
use tiny_http::{Header, Method, Response, Server};

/// A response produced by [`PreviewServer::route`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl Reply {
    fn ok(content_type: &'static str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            content_type,
            body: body.into(),
        }
    }

    fn not_found() -> Self {
        Self {
            status: 404,
            content_type: "text/plain; charset=utf-8",
            body: b"Not Found".to_vec(),
        }
    }
}

fn content_type_for(name: &str) -> &'static str {
    let ext = name.rsplit_once('.').map(|(_, e)| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("txt") | Some("md") => "text/plain; charset=utf-8",
        _ => "application/octet-stream",
    }
}

/// Stops a running [`PreviewServer`] from another thread
#[derive(Clone)]
pub struct ShutdownHandle {
    server: Arc<Server>,
}

impl ShutdownHandle {
    pub fn shutdown(&self) {
        self.server.unblock();
    }
}

pub struct PreviewServer {
    server: Arc<Server>,
    site: Site,
    config: SiteConfig,
}

impl PreviewServer {
    /// Bind to `config.bind_addr`. Port 0 picks a free port; see [`Self::addr`].
    pub fn bind(site: Site, config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let server = Server::http(config.bind_addr.as_str())
            .map_err(|e| Error::Serve(format!("bind {} failed: {}", config.bind_addr, e)))?;
        Ok(Self {
            server: Arc::new(server),
            site,
            config,
        })
    }

    /// Address actually bound
    pub fn addr(&self) -> Result<SocketAddr> {
        self.server
            .server_addr()
            .to_ip()
            .ok_or_else(|| Error::Serve("server is not bound to an IP address".into()))
    }

    pub fn shutdown_handle(&self) -> ShutdownHandle {
        ShutdownHandle {
            server: Arc::clone(&self.server),
        }
    }

    /// Resolve a request path to a reply. Query strings are ignored and the
    /// path is percent-decoded before any checks.
    pub fn route(&self, url: &str) -> Reply {
        let raw = url.split(['?', '#']).next().unwrap_or_default();
        let path = match percent_decode_str(raw).decode_utf8() {
            Ok(p) => p,
            Err(_) => return Reply::not_found(),
        };
        let path = path.as_ref();

        if path == "/" || path == "/index.html" {
            let assets = self.scan_assets();
            let html = render_document(&self.site, &assets, &self.config);
            return Reply::ok("text/html; charset=utf-8", html);
        }

        let name = match path.strip_prefix('/') {
            Some(n) if !n.is_empty() && !n.contains('/') && !n.contains('\\') && n != ".." => n,
            _ => return Reply::not_found(),
        };

        if name == self.config.stylesheet {
            return Reply::ok("text/css; charset=utf-8", stylesheet(&self.config.palette));
        }

        if !self.scan_assets().contains(name) {
            return Reply::not_found();
        }
        let file = self.config.public_dir.join(name);
        match std::fs::read(&file) {
            Ok(bytes) => Reply::ok(content_type_for(name), bytes),
            Err(e) => {
                warn!("failed to read asset {}: {}", file.display(), e);
                Reply::not_found()
            }
        }
    }

    fn scan_assets(&self) -> AssetIndex {
        AssetIndex::scan(&self.config.public_dir).unwrap_or_else(|e| {
            warn!("asset scan failed, using placeholders: {}", e);
            AssetIndex::empty()
        })
    }

    /// Serve requests until [`ShutdownHandle::shutdown`] is called
    pub fn run(self) -> Result<()> {
        info!("preview listening on http://{}", self.addr()?);
        for request in self.server.incoming_requests() {
            let reply = match request.method() {
                Method::Get | Method::Head => self.route(request.url()),
                _ => Reply {
                    status: 405,
                    content_type: "text/plain; charset=utf-8",
                    body: b"Method Not Allowed".to_vec(),
                },
            };
            info!("{} {} -> {}", request.method(), request.url(), reply.status);

            let mut response = Response::from_data(reply.body).with_status_code(reply.status);
            if let Ok(h) = Header::from_bytes(&b"Content-Type"[..], reply.content_type.as_bytes()) {
                response = response.with_header(h);
            }
            if let Err(e) = request.respond(response) {
                warn!("failed to send response: {}", e);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(public_dir: std::path::PathBuf) -> PreviewServer {
        let config = SiteConfig {
            bind_addr: "127.0.0.1:0".into(),
            public_dir,
            ..Default::default()
        };
        PreviewServer::bind(Site::portfolio(), config).expect("bind preview")
    }

    #[test]
    fn routes_page_and_stylesheet() {
        let srv = preview("/definitely/not/here/labfolio".into());
        let page = srv.route("/?utm=1");
        assert_eq!(page.status, 200);
        assert!(page.content_type.starts_with("text/html"));
        assert!(String::from_utf8(page.body).unwrap().contains("Bright Iwara"));

        let css = srv.route("/styles.css");
        assert_eq!(css.status, 200);
        assert!(css.content_type.starts_with("text/css"));
    }

    #[test]
    fn rejects_unknown_and_traversal_paths() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("placeholder.png"), b"\x89PNG").unwrap();
        let srv = preview(dir.path().to_path_buf());

        assert_eq!(srv.route("/placeholder.png").status, 200);
        assert_eq!(srv.route("/placeholder.png").content_type, "image/png");
        assert_eq!(srv.route("/missing.png").status, 404);
        assert_eq!(srv.route("/../Cargo.toml").status, 404);
        assert_eq!(srv.route("/nested/placeholder.png").status, 404);
        assert_eq!(srv.route("/..").status, 404);
    }

    #[test]
    fn serves_asset_names_that_need_encoding() {
        const PROJECTS: &[crate::content::Project] = &[crate::content::Project {
            title: "Dashboards",
            description: "Screens with spaces in their names",
            images: &["AD DS Dashboard.png"],
        }];
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("AD DS Dashboard.png"), b"\x89PNG").unwrap();
        let config = SiteConfig {
            bind_addr: "127.0.0.1:0".into(),
            public_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let site = Site {
            projects: PROJECTS,
            ..Site::portfolio()
        };
        let srv = PreviewServer::bind(site, config).expect("bind preview");

        let page = String::from_utf8(srv.route("/").body).unwrap();
        assert!(page.contains("<img src=\"/AD%20DS%20Dashboard.png\""));

        let img = srv.route("/AD%20DS%20Dashboard.png");
        assert_eq!(img.status, 200);
        assert_eq!(img.body, b"\x89PNG".to_vec());

        // encoded separators still cannot escape the public directory
        assert_eq!(srv.route("/..%2FCargo.toml").status, 404);
        assert_eq!(srv.route("/%2E%2E").status, 404);
        assert_eq!(srv.route("/%FF.png").status, 404);
    }

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for("a.PNG"), "image/png");
        assert_eq!(content_type_for("a.jpeg"), "image/jpeg");
        assert_eq!(content_type_for("noext"), "application/octet-stream");
    }
}
