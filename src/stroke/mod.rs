pub(crate) mod interpolate;
pub(crate) mod smooth;
