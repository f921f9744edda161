pub(crate) mod bitmap;
pub(crate) mod component;
pub(crate) mod resolve;
