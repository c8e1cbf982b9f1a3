pub mod auth_api;
pub mod navigator;
pub mod token_store;

pub use auth_api::GlooAuthApi;
pub use navigator::RouterNavigator;
pub use token_store::LocalTokenStore;
