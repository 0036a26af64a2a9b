//! Content sources
//!
//! The single suspension point of a load: fetching the raw document text.
//! Parsing happens in the loader so every source fails the same way on bad JSON.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::error::LoadError;

/// Where the raw content document comes from.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch the raw JSON text.
    async fn fetch(&self) -> Result<String, LoadError>;

    /// Human-readable location, used in logs and the fallback notice.
    fn location(&self) -> String;
}

// ============================================================================
// Filesystem
// ============================================================================

/// Reads the document from disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    path: PathBuf,
}

impl FsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `config/content.json` under `site_root`.
    pub fn under(site_root: impl AsRef<Path>, relative: &str) -> Self {
        Self::new(site_root.as_ref().join(relative))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tracing::debug!("Reading content from {}", self.path.display());
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadError::NotFound(self.path.display().to_string())
            } else {
                LoadError::Io {
                    path: self.path.display().to_string(),
                    source: e,
                }
            }
        })
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

// ============================================================================
// HTTP
// ============================================================================

/// Fetches the document over HTTP. Non-success statuses are load failures.
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: reqwest::Client,
    url: String,
}

#[cfg(feature = "http")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl ContentSource for HttpSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        tracing::debug!("Fetching content from {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

// ============================================================================
// In-memory
// ============================================================================

/// Serves a fixed body. Used for pre-rendering and in tests.
#[derive(Debug, Clone)]
pub struct StaticSource {
    body: String,
}

impl StaticSource {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}

#[async_trait]
impl ContentSource for StaticSource {
    async fn fetch(&self) -> Result<String, LoadError> {
        Ok(self.body.clone())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_fs_source_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"site": {{"title": "Hive"}}}}"#).unwrap();

        let source = FsSource::new(file.path());
        let body = source.fetch().await.unwrap();
        assert!(body.contains("Hive"));
    }

    #[tokio::test]
    async fn test_fs_source_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let source = FsSource::under(dir.path(), "config/content.json");

        match source.fetch().await {
            Err(LoadError::NotFound(path)) => assert!(path.ends_with("content.json")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_static_source_returns_body() {
        let source = StaticSource::new("{}");
        assert_eq!(source.fetch().await.unwrap(), "{}");
        assert_eq!(source.location(), "<memory>");
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_source_404_is_status_error() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config/content.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let source = HttpSource::new(format!("{}/config/content.json", server.uri()));
        match source.fetch().await {
            Err(LoadError::Status { status, .. }) => assert_eq!(status, 404),
            other => panic!("expected HTTP 404, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[tokio::test]
    async fn test_http_source_returns_body() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/config/content.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"hero":{}}"#))
            .mount(&server)
            .await;

        let source = HttpSource::new(format!("{}/config/content.json", server.uri()));
        assert_eq!(source.fetch().await.unwrap(), r#"{"hero":{}}"#);
    }
}
