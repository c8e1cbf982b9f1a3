//! Headless admin login: the shared login flow wired to reqwest, a token
//! file and the terminal.

pub mod api;
pub mod config;
pub mod navigator;
pub mod store;

pub use api::HttpAuthApi;
pub use config::AppConfig;
pub use navigator::ConsoleNavigator;
pub use store::FileTokenStore;
