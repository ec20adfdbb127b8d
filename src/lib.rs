pub mod app;
pub mod client;
pub mod config;
pub mod context;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod preferences;
pub mod state;
pub mod store;
pub mod ui;
pub mod validation;

pub use app::router;
pub use client::ApiClient;
pub use config::{AppConfig, ClientConfig};
pub use context::EntryContext;
pub use state::AppState;
pub use store::EntryStore;
