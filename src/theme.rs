//! Brand palette and the global stylesheet.
//!
//! Layout and typography come from the utility classes emitted by the
//! renderer. This module only owns the brand colours, the theme extension
//! handed to the utility runtime, and the few global rules the utilities
//! don't cover.

use serde::Serialize;

/// Brand colours, exposed to the utility classes as `navy`, `silver`,
/// `tangerine` and `brandblue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub navy: String,
    pub silver: String,
    pub tangerine: String,
    pub brandblue: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            navy: "#0a2033".to_string(),
            silver: "#cfd8dd".to_string(),
            tangerine: "#ff7a18".to_string(),
            brandblue: "#1f6feb".to_string(),
        }
    }
}

/// Theme extension for the utility CSS runtime, as JSON.
///
/// `<` is written as `\u003c` so the JSON can sit inside a `<script>`
/// element without ending it.
pub fn utility_config(palette: &Palette) -> String {
    serde_json::json!({
        "theme": {
            "extend": {
                "colors": palette,
            }
        }
    })
    .to_string()
    .replace('<', "\\u003c")
}

/// Height in pixels a project card lifts on hover
pub const CARD_HOVER_LIFT_PX: u32 = 6;

/// Global stylesheet served next to the page.
pub fn stylesheet(palette: &Palette) -> String {
    let mut css = String::new();
    css.push_str(":root{\n");
    css.push_str(&format!("  --navy: {};\n", palette.navy));
    css.push_str(&format!("  --silver: {};\n", palette.silver));
    css.push_str(&format!("  --tangerine: {};\n", palette.tangerine));
    css.push_str(&format!("  --brandblue: {};\n", palette.brandblue));
    css.push_str("}\n\n");
    css.push_str("html,body{height:100%}\n");
    css.push_str("body{background:linear-gradient(180deg,#f8fbff 0%,#ffffff 100%);font-family:Inter,ui-sans-serif,system-ui,-apple-system,\"Segoe UI\",Roboto,\"Helvetica Neue\",Arial}\n\n");
    // placeholder tile
    css.push_str(".screenshot{background:#fff;border:1px solid rgba(10,32,51,0.06);border-radius:8px;padding:8px;display:flex;align-items:center;justify-content:center;min-height:160px}\n");
    css.push_str(".screenshot img{max-width:100%;height:auto;border-radius:4px}\n\n");
    css.push_str(".project{transition:transform 150ms ease-out}\n");
    css.push_str(&format!(
        ".project:hover{{transform:translateY(-{}px)}}\n",
        CARD_HOVER_LIFT_PX
    ));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utility_config_extends_colors() {
        let cfg = utility_config(&Palette::default());
        let v: serde_json::Value = serde_json::from_str(&cfg).unwrap();
        assert_eq!(v["theme"]["extend"]["colors"]["navy"], "#0a2033");
        assert_eq!(v["theme"]["extend"]["colors"]["brandblue"], "#1f6feb");
    }

    #[test]
    fn utility_config_escapes_markup() {
        let palette = Palette {
            navy: "</script>".into(),
            ..Default::default()
        };
        let cfg = utility_config(&palette);
        assert!(!cfg.contains('<'));
        assert!(cfg.contains("\\u003c/script>"));
        let v: serde_json::Value = serde_json::from_str(&cfg).unwrap();
        assert_eq!(v["theme"]["extend"]["colors"]["navy"], "</script>");
    }

    #[test]
    fn stylesheet_uses_palette() {
        let palette = Palette {
            navy: "#000001".into(),
            ..Default::default()
        };
        let css = stylesheet(&palette);
        assert!(css.contains("--navy: #000001;"));
        assert!(css.contains(".screenshot{"));
        assert!(css.contains("translateY(-6px)"));
    }
}
