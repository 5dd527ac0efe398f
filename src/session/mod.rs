pub(crate) mod resize;
pub(crate) mod widget;
