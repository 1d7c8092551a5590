//! Site configuration
//!
//! Everything here is fixed at build time: the page is a static wasm bundle
//! with no process environment to read at runtime.

use eterna_ui::style::{NarrowBreakpoint, NARROW_BREAKPOINT};
use tracing::Level;

const DEFAULT_BACKEND_URL: &str = "http://localhost:3000";
const DEFAULT_LOG_LEVEL: Level = Level::INFO;

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Base URL of the mail backend, without a trailing slash
    pub backend_url: String,
    pub log_level: Level,
    /// Viewport width below which narrow layouts apply
    pub narrow_breakpoint: f64,
}

impl SiteConfig {
    /// Read `PUBLIC_BACKEND_URL` and `ETERNA_LOG` as they were when the crate
    /// was compiled, falling back to the defaults.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("PUBLIC_BACKEND_URL"), option_env!("ETERNA_LOG"))
    }

    fn from_values(backend_url: Option<&str>, log_level: Option<&str>) -> Self {
        let backend_url = backend_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BACKEND_URL)
            .trim_end_matches('/')
            .to_string();

        let log_level = log_level
            .and_then(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            backend_url,
            log_level,
            narrow_breakpoint: NARROW_BREAKPOINT,
        }
    }

    /// Breakpoint handed to the views as context
    pub fn breakpoint(&self) -> NarrowBreakpoint {
        NarrowBreakpoint(self.narrow_breakpoint)
    }

    /// Endpoint the contact form posts to
    pub fn send_email_url(&self) -> String {
        format!("{}/send-email", self.backend_url)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

/// Parse a level name such as `debug` or `WARN`. Unknown names yield `None`.
pub fn parse_log_level(value: &str) -> Option<Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" | "warning" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SiteConfig::default();
        assert_eq!(config.backend_url, "http://localhost:3000");
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.narrow_breakpoint, 768.0);
    }

    #[test]
    fn views_receive_the_configured_breakpoint() {
        let config = SiteConfig {
            narrow_breakpoint: 1024.0,
            ..SiteConfig::default()
        };
        assert_eq!(config.breakpoint(), NarrowBreakpoint(1024.0));
        assert_eq!(SiteConfig::default().breakpoint(), NarrowBreakpoint::default());
    }

    #[test]
    fn backend_url_drops_trailing_slash() {
        let config = SiteConfig::from_values(Some("https://api.example.com/"), None);
        assert_eq!(config.send_email_url(), "https://api.example.com/send-email");
    }

    #[test]
    fn blank_backend_url_falls_back() {
        let config = SiteConfig::from_values(Some("  "), None);
        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn parses_level_names_case_insensitively() {
        assert_eq!(parse_log_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_log_level(" WARN "), Some(Level::WARN));
        assert_eq!(parse_log_level("warning"), Some(Level::WARN));
        assert_eq!(parse_log_level("verbose"), None);
    }

    #[test]
    fn unknown_level_falls_back_to_info() {
        let config = SiteConfig::from_values(None, Some("loud"));
        assert_eq!(config.log_level, Level::INFO);
    }
}
