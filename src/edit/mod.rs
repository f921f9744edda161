pub(crate) mod color;
pub(crate) mod compositor;
pub(crate) mod noise;
pub(crate) mod params;
pub(crate) mod sharpen;
