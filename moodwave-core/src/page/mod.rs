pub(crate) mod controller;
pub(crate) mod intro;
pub(crate) mod session;
pub(crate) mod theme;
pub(crate) mod visibility;
