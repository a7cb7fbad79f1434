//! Event Handlers
//!
//! - keyboard: User keyboard input
//!
//! Handlers take &mut App and translate events into model edits.

pub mod keyboard;

pub use keyboard::handle_key;
