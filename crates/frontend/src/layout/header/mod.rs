pub mod cart_preview;
pub mod header;
pub mod nav;
pub mod state;
pub mod user_menu;

pub use header::Header;
pub use state::HeaderState;
