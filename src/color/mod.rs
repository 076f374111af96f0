pub mod contrast;
pub(crate) mod def;
