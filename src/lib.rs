//! Dialog Engine — single-step playback of branching game conversations.
//!
//! The engine walks conversation graphs owned by one or more dialog stores,
//! pausing on spoken lines, option menus, and game events until the host
//! game loop pumps it again with `execute` or feeds back a player choice.

pub mod core;
pub mod schema;
