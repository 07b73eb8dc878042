//! CLI command implementations.

pub(crate) mod convert;
pub(crate) mod global;
pub(crate) mod info;
pub(crate) mod listings;
pub(crate) mod map;
pub(crate) mod quotes;
