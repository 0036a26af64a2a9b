//! Content Binder
//!
//! Drives a static marketing page from one JSON content document.
//!
//! - `content/`: the document, dotted-path resolution, and where it comes from
//! - `binder/`: the binding table and per-section renderers (server-side rewriting)
//! - `loader`: load state machine, ready notification, load-failure fallback
//! - `calculator`, `contact`: the page's two interactive widgets
//! - `api_server`: Axum surface serving the bound page and the document (feature `api`)

pub mod binder;
pub mod calculator;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod fallback;
pub mod loader;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use binder::{BindReport, Binder, BoundPage};
pub use config::SiteConfig;
pub use contact::ContactSwitcher;
pub use content::{ContentDocument, ContentSource, FsSource, StaticSource};
pub use error::{BindError, ContactError, LoadError};
pub use loader::{ContentEvent, ContentLoader, LoadState};

#[cfg(feature = "http")]
pub use content::HttpSource;

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
