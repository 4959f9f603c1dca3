//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `events` - Background fetch result processing
//! - `render` - Layout and dispatch to the widgets
//! - `helpers` - Refresh spawning and panic capture
//! - `header` - Title row and global stat cards
//! - `movers` - Top gainers and losers cards
//! - `markets` - Market table
//! - `chart` - 7-day price chart for the selected coin
//! - `news` - News list
//! - `status` - Status bar widget

mod chart;
mod events;
mod header;
mod helpers;
mod input;
mod loop_runner;
mod markets;
mod movers;
mod news;
mod render;
mod status;

pub use loop_runner::{run, Action};
