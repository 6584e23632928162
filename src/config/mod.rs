mod master;
mod settings;

pub use master::*;
pub use settings::*;
