use std::collections::BTreeMap;

/// Well-known key under which the widget registers its stylesheet.
pub const STYLE_KEY: &str = "chartburst-styles";

/// Presentation rules for the mounted subtree.
pub const STYLESHEET: &str = r#"
.chartburst { position: relative; width: 100%; height: 100%; margin: 0 auto; }
.chartburst .chart-container { position: absolute; width: 90%; height: 92%; left: 50%; top: 50%; transform: translate(-50%, -50%); }
.chartburst .animated-image { position: absolute; left: 50%; top: 50%; opacity: 0; z-index: 1000; transform: translate(-50%, -50%) rotate(0deg) scale(0); transition: all 0.3s cubic-bezier(0, 0.92, 0.81, 1.02); }
.chartburst .animated-image.animate { opacity: 1; }
.chartburst .image-card { display: flex; width: var(--image-width); height: var(--image-height); padding: 4px; border-radius: 16px; background: white; box-sizing: border-box; }
.chartburst .pie-chart-container { position: absolute; left: 50%; top: 50%; z-index: 10; opacity: 0; width: min(37.5%, 180px); border-radius: 32px; transform: translate(-50%, -50%) scale(0); transition: transform 0.6s cubic-bezier(0, 0.92, 0.81, 1.02), opacity 0.6s cubic-bezier(0.175, 0.885, 0.32, 1.275); }
.chartburst .pie-chart-container.animate { opacity: 1; transform: translate(-50%, -50%) scale(1); }
.chartburst .path-a, .chartburst .path-b { fill: #fff; transition: transform 0.5s cubic-bezier(0, 0.92, 0.81, 1.02); }
.chartburst .video-overlay-a { mask: url(#maskA); }
.chartburst .video-overlay-b { mask: url(#maskB); filter: grayscale(1) brightness(1.5) contrast(1.3); }
"#;

/// Page-wide stylesheet registry.
///
/// Registration is idempotent per key: the first stylesheet registered under a key wins and
/// later registrations are ignored.
#[derive(Clone, Debug, Default)]
pub struct StyleRegistry {
    sheets: BTreeMap<String, String>,
}

impl StyleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `css` under `key`. Returns `true` when this call inserted it.
    pub fn register(&mut self, key: &str, css: &str) -> bool {
        if self.sheets.contains_key(key) {
            return false;
        }
        self.sheets.insert(key.to_owned(), css.to_owned());
        true
    }

    /// Return `true` when `key` has a stylesheet.
    pub fn contains(&self, key: &str) -> bool {
        self.sheets.contains_key(key)
    }

    /// Stylesheet registered under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.sheets.get(key).map(String::as_str)
    }

    /// Number of registered stylesheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Return `true` when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/styles.rs"]
mod tests;
