pub mod config;
pub mod constants;
pub mod models;
pub mod resolver;
pub mod store;
pub mod tracing_setup;
pub mod weather;

pub use config::CoreConfig;
pub use models::AppState;
pub use store::StateStore;
