//! coursekit manager dashboard
//!
//! Serves the browser-facing admin dashboard: the layout shell pages, the
//! content authoring form flow and thin data proxies to the content service.

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    rust_2018_idioms
)]

pub mod api_client;
pub mod form;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod service;
pub mod shell;
pub mod state;

// Re-export the main entry points
pub use api_client::ApiClient;
pub use form::{ContentForm, FormError, FormMode, FormPhase, SubmitOutcome};
pub use server::build_app;
pub use service::{ContentService, MockContentService};
pub use state::AppState;
