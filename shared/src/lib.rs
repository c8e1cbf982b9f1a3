mod error;
mod login;
mod navigation;
mod storage;
mod types;

pub use error::*;
pub use login::*;
pub use navigation::*;
pub use storage::*;
pub use types::*;
