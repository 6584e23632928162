pub mod api;

mod config;
mod document;
mod error;
mod saved_file;
mod store;

pub use config::*;
pub use document::*;
pub use error::*;
pub use saved_file::*;
pub use store::*;
