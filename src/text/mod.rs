pub(crate) mod measure;
pub(crate) mod metrics;
pub(crate) mod parley_engine;
