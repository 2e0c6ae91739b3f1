//! ADAS monitoring console
//!
//! The console core (`Console`, `IndicatorEngine`, `LayoutController`)
//! drives any `DisplaySurface`. The binary wires it to a ratatui screen or
//! to a JSON-lines emitter.

pub mod app;
pub mod cli;
pub mod color;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod headless;
pub mod indicator;
pub mod input;
pub mod layout;
pub mod logging;
pub mod surface;
pub mod ui;

pub use console::Console;
pub use error::{ConsoleError, Result};
pub use surface::{DisplaySurface, RecordingSurface, SurfaceCommand};
