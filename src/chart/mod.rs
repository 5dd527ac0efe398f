pub(crate) mod sector;
