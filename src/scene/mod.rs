pub(crate) mod container;
pub(crate) mod placeholder;
pub(crate) mod styles;
pub(crate) mod tree;
