pub(crate) mod anchor;
pub(crate) mod ordinal;
