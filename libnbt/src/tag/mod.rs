// libnbt/src/tag/mod.rs

pub mod builder;
pub mod exchange;
pub mod handle;

pub use builder::TagBuilder;
pub use exchange::ResponseGuard;
pub use handle::{Active, Inactive, Tag};
