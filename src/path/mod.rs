pub(crate) mod checkpoint;
pub(crate) mod ingest;
pub(crate) mod resolver;
