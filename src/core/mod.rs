pub mod config;
pub mod options;
pub mod playback;
pub mod redirect;
pub mod stack;
pub mod store;
