pub mod dialog;
pub mod entry;
pub mod handle;
