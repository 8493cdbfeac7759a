pub(crate) mod builder;
pub(crate) mod curve;
pub(crate) mod scale;
pub(crate) mod tooltip;
pub(crate) mod week;
