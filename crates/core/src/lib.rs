//! Fontshelf Core - font record model and the native font manager contract.

pub mod error;
pub mod manager;
pub mod path;
pub mod record;

pub use error::{Error, Operation, Result};
pub use manager::{CleanupPlan, FontManager, FontTarget};
pub use path::{canonicalize, identity_key};
pub use record::{FontRecord, FontScope, FontSource};
