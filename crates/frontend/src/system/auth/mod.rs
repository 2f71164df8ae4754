pub mod api;
pub mod context;
pub mod error;
pub mod modal;
pub mod storage;

pub use context::{use_auth, AuthProvider, AuthStore, SharedAuth};
pub use error::AuthError;
pub use modal::AuthModal;
