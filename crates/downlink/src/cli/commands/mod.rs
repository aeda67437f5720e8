//! CLI commands

mod pr;
mod sync;
mod validate;

pub use pr::PrCommand;
pub use sync::SyncCommand;
pub use validate::ValidateCommand;
