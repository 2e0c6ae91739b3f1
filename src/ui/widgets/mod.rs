//! Widgets composing the console screen

pub mod actions;
pub mod feeds;
pub mod indicators;
pub mod log;
pub mod title;
