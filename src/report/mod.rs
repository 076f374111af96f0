//! Report renderers over a finished [`LintSession`](crate::session::LintSession).

pub(crate) mod crops;
pub(crate) mod json;
pub(crate) mod text;
