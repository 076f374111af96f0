pub(crate) mod context;
pub(crate) mod node;
pub(crate) mod walker;
