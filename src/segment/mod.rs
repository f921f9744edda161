pub(crate) mod capability;
