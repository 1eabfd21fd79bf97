//! CLI command implementations.

pub(crate) mod migrate;
pub(crate) mod serve;

pub(crate) use migrate::MigrateBlogArgs;
pub(crate) use serve::ServeArgs;
