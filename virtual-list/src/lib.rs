//! A headless windowing engine for very large lists of uniform-size items.
//!
//! For adapter-level utilities (a simulated scroll surface, smooth-scroll tweens, frame
//! queues), see the `virtual-list-adapter` crate.
//!
//! Given a fixed item size and a scroll offset, the engine decides which slice of the item
//! sequence must be materialized, and navigates by pixel offset, index, stable key, or edge.
//!
//! It is UI-agnostic. A UI layer is expected to:
//! - report viewport height measurements and scroll events;
//! - implement the capabilities in [`host`] (scroll surface, frame scheduling, rendering).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod geometry;
pub mod host;
mod key;
mod key_index;
mod list;
mod options;
mod resize;
mod scroll;
mod state;
mod types;


pub use host::{
    FrameScheduler, Host, RenderContent, RenderPass, Renderer, ScrollSurface, VisibleSlice,
};
pub use key::ItemKey;
pub use key_index::KeyIndex;
pub use list::VirtualList;
pub use options::{KeyFn, Keyed, OnResizeCallback, OnScrollCallback, VirtualListOptions};
pub use resize::ResizeBridge;
pub use scroll::{ScrollController, ScrollTarget, ScrollToOptions};
pub use state::ViewportState;
pub use types::{
    Layout, ResizeEvent, ScrollBehavior, ScrollCommand, ScrollEvent, ScrollPosition,
    VisibleWindow,
};
