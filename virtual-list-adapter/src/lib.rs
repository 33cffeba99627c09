//! Adapter utilities for the `virtual-list` crate.
//!
//! The `virtual-list` crate is UI-agnostic: it calls into host capabilities (scroll surface,
//! frame scheduling, rendering). This crate provides small, framework-neutral implementations
//! of those capabilities for hosts that have no native ones:
//!
//! - [`SimulatedSurface`]: a clamping scroll container with tween-based smooth scrolling
//! - [`FrameQueue`]: next-frame scheduling, or a fixed-interval timer fallback
//! - [`RenderLog`]: a renderer that records passes
//! - [`Driver`]: an event loop tying them to a `VirtualList`
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod driver;
mod frame;
mod host;
mod render_log;
mod surface;
mod tween;

#[cfg(test)]
mod tests;

pub use driver::{Driver, Tick};
pub use frame::FrameQueue;
pub use host::SimHost;
pub use render_log::{RenderLog, RenderSnapshot, RenderedContent};
pub use surface::SimulatedSurface;
pub use tween::{Easing, Tween};
