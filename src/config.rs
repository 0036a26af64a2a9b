//! Site configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `SITE_ROOT` | `.` |
//! | `CONTENT_PATH` | `config/content.json` (relative to `SITE_ROOT`) |
//! | `CONTENT_URL` | unset; when set, the document is fetched over HTTP |
//! | `PAGE_TEMPLATE` | `index.html` (relative to `SITE_ROOT`) |
//! | `PORT` | `3000` |
//! | `CACHE_TTL_SECS` | `300` |

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::content::{ContentSource, FsSource};
use crate::loader::ContentLoader;

pub const DEFAULT_CONTENT_PATH: &str = "config/content.json";
pub const DEFAULT_TEMPLATE: &str = "index.html";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub site_root: PathBuf,
    pub content_path: String,
    pub content_url: Option<String>,
    pub page_template: String,
    pub port: u16,
    pub cache_ttl: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            content_path: DEFAULT_CONTENT_PATH.to_string(),
            content_url: None,
            page_template: DEFAULT_TEMPLATE.to_string(),
            port: DEFAULT_PORT,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset or unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            site_root: lookup("SITE_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.site_root),
            content_path: lookup("CONTENT_PATH").unwrap_or(defaults.content_path),
            content_url: lookup("CONTENT_URL").filter(|u| !u.is_empty()),
            page_template: lookup("PAGE_TEMPLATE").unwrap_or(defaults.page_template),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            cache_ttl: lookup("CACHE_TTL_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.cache_ttl),
        }
    }

    pub fn content_file(&self) -> PathBuf {
        self.site_root.join(&self.content_path)
    }

    pub fn template_file(&self) -> PathBuf {
        self.site_root.join(&self.page_template)
    }

    /// Read the page template from disk.
    pub async fn read_template(&self) -> Result<String> {
        let path = self.template_file();
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read page template {}", path.display()))
    }

    /// The configured content source: HTTP when `CONTENT_URL` is set, else the filesystem.
    pub fn content_source(&self) -> Box<dyn ContentSource> {
        #[cfg(feature = "http")]
        {
            if let Some(url) = &self.content_url {
                return Box::new(crate::content::HttpSource::new(url.clone()));
            }
        }
        #[cfg(not(feature = "http"))]
        {
            if self.content_url.is_some() {
                tracing::warn!("CONTENT_URL ignored: built without the `http` feature");
            }
        }
        Box::new(FsSource::new(self.content_file()))
    }

    /// Loader over the configured source and template (not yet loaded).
    pub async fn build_loader(&self) -> Result<ContentLoader> {
        let template = self.read_template().await?;
        Ok(ContentLoader::with_source(self.content_source(), template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(|_| None);
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.content_file(), PathBuf::from("./config/content.json"));
        assert_eq!(config.port, 3000);
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup_from(&[
            ("SITE_ROOT", "/srv/site"),
            ("PAGE_TEMPLATE", "home.html"),
            ("PORT", "8080"),
            ("CACHE_TTL_SECS", "60"),
            ("CONTENT_URL", "https://cdn.example.com/content.json"),
        ]));
        assert_eq!(config.template_file(), PathBuf::from("/srv/site/home.html"));
        assert_eq!(config.port, 8080);
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(
            config.content_url.as_deref(),
            Some("https://cdn.example.com/content.json")
        );
    }

    #[test]
    fn test_bad_port_falls_back() {
        let config = SiteConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")]));
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[tokio::test]
    async fn test_missing_template_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig {
            site_root: dir.path().to_path_buf(),
            ..SiteConfig::default()
        };
        assert!(config.build_loader().await.is_err());
    }
}
