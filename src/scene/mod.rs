pub(crate) mod config;
pub(crate) mod entity;
pub(crate) mod frame;
