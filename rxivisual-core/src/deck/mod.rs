pub(crate) mod active;
pub(crate) mod config;
pub(crate) mod content;
pub(crate) mod session;
pub(crate) mod track;
pub(crate) mod transform;
