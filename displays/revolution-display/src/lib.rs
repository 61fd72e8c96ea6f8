//! Screen layout and rendering for the Revolution watchface
//!
//! This crate provides:
//! - The fixed 144×168 layout (`layout`)
//! - Procedurally drawn digit and weekday resources (`glyphs`)
//! - A packed 1bpp `FrameBuffer` usable as an `embedded-graphics` target
//! - `WatchScreen`, the `BitmapHost` the watchface draws through
//! - `DisplayBackend` for whatever finally shows the frame
//!
//! # Architecture
//!
//! The watchface in `revolution-core` decides *what* each slot shows.
//! `WatchScreen` turns slot loads and releases into drawing on any
//! `DrawTarget<Color = BinaryColor>`, usually a `FrameBuffer`. A backend then
//! pushes the finished frame to a panel or a desktop window.

#![no_std]

pub mod backend;
pub mod framebuffer;
pub mod glyphs;
pub mod layout;
pub mod screen;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError};
pub use framebuffer::FrameBuffer;
pub use screen::{Placement, WatchScreen};
