//! Content Loader (orchestrator)
//!
//! Owns the content document and the rendered page for one site.
//!
//! State machine:
//! - `Unloaded` -> `Loading` -> `Ready`  (document parsed, every rule ran once,
//!   `ContentEvent::Ready` broadcast)
//! - `Unloaded` -> `Loading` -> `Failed` (fetch, parse or rewrite failed; page
//!   body replaced by the fallback notice; no rule output kept)
//!
//! `reload` re-enters `Loading` from any state and always binds against the
//! pristine template. While loading, the previously rendered page stays served.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tokio::sync::broadcast;

use crate::binder::{BindReport, Binder};
use crate::content::{ContentDocument, ContentSource};
use crate::error::{BindError, LoadError};
use crate::fallback::render_fallback;

const EVENT_CAPACITY: usize = 16;

/// Where the loader is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadState {
    Unloaded,
    Loading,
    Ready,
    Failed,
}

/// Notifications for downstream consumers.
#[derive(Debug, Clone)]
pub enum ContentEvent {
    /// All rules ran; carries the full document.
    Ready(ContentDocument),
}

struct Inner {
    state: LoadState,
    document: Option<ContentDocument>,
    page: String,
    report: Option<BindReport>,
    loaded_at: Option<DateTime<Utc>>,
    last_error: Option<String>,
    /// Bumped whenever a load finishes, either way.
    generation: u64,
}

/// Loads the content document and binds it into the page template.
pub struct ContentLoader {
    source: Box<dyn ContentSource>,
    template: String,
    binder: Binder,
    inner: RwLock<Inner>,
    events: broadcast::Sender<ContentEvent>,
}

/// Why a load ended in `Failed`.
#[derive(Debug, thiserror::Error)]
enum Failure {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Bind(#[from] BindError),
}

impl ContentLoader {
    pub fn new(source: impl ContentSource + 'static, template: impl Into<String>) -> Self {
        Self::with_source(Box::new(source), template)
    }

    pub fn with_source(source: Box<dyn ContentSource>, template: impl Into<String>) -> Self {
        let template = template.into();
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            source,
            inner: RwLock::new(Inner {
                state: LoadState::Unloaded,
                document: None,
                page: template.clone(),
                report: None,
                loaded_at: None,
                last_error: None,
                generation: 0,
            }),
            template,
            binder: Binder::new(),
            events,
        }
    }

    /// Fetch, parse and bind. Returns the state the load ended in.
    pub async fn load(&self) -> LoadState {
        self.write().state = LoadState::Loading;
        tracing::info!("Loading content from {}", self.source.location());

        let outcome = match self.source.fetch().await {
            Ok(text) => ContentDocument::from_json(&text)
                .map_err(Failure::Load)
                .and_then(|doc| {
                    self.binder
                        .bind(&self.template, &doc)
                        .map(|page| (doc, page))
                        .map_err(Failure::Bind)
                }),
            Err(e) => Err(Failure::Load(e)),
        };

        match outcome {
            Ok((document, page)) => {
                {
                    let mut inner = self.write();
                    inner.state = LoadState::Ready;
                    inner.document = Some(document.clone());
                    inner.page = page.html;
                    inner.report = Some(page.report);
                    inner.loaded_at = Some(Utc::now());
                    inner.last_error = None;
                    inner.generation += 1;
                }
                tracing::info!("Content loaded successfully from {}", self.source.location());
                // No subscribers is fine.
                let _ = self.events.send(ContentEvent::Ready(document));
                LoadState::Ready
            }
            Err(failure) => {
                tracing::error!("Error loading content: {}", failure);
                self.fail(failure.to_string());
                LoadState::Failed
            }
        }
    }

    /// Re-enter `Loading` from any state.
    pub async fn reload(&self) -> LoadState {
        self.load().await
    }

    fn fail(&self, message: String) {
        let location = self.source.location();
        let page = render_fallback(&self.template, &location).unwrap_or_else(|e| {
            tracing::error!("Fallback notice failed to render: {}", e);
            String::new()
        });

        let mut inner = self.write();
        inner.state = LoadState::Failed;
        inner.document = None;
        inner.page = page;
        inner.report = None;
        inner.loaded_at = None;
        inner.last_error = Some(message);
        inner.generation += 1;
    }

    pub fn state(&self) -> LoadState {
        self.read().state
    }

    /// The whole document, if loaded.
    pub fn document(&self) -> Option<ContentDocument> {
        self.read().document.clone()
    }

    /// Number of loads finished so far, successful or not.
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    /// Generation and document, read together.
    pub fn snapshot(&self) -> (u64, Option<ContentDocument>) {
        let inner = self.read();
        (inner.generation, inner.document.clone())
    }

    /// Value at `path`; `None` when absent or when nothing is loaded.
    pub fn value(&self, path: &str) -> Option<Value> {
        let inner = self.read();
        crate::content::resolve(inner.document.as_ref().map(|d| d.root()), path).cloned()
    }

    /// Currently served page markup.
    pub fn page_html(&self) -> String {
        self.read().page.clone()
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn report(&self) -> Option<BindReport> {
        self.read().report.clone()
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.read().loaded_at
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    pub fn location(&self) -> String {
        self.source.location()
    }

    /// Receive `ContentEvent::Ready` after each successful load.
    pub fn subscribe(&self) -> broadcast::Receiver<ContentEvent> {
        self.events.subscribe()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
