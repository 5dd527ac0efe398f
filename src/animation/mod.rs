pub(crate) mod ease;
pub(crate) mod sequencer;
pub(crate) mod sweep;
pub(crate) mod timer;
