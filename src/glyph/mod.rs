pub(crate) mod library;
pub(crate) mod model;
