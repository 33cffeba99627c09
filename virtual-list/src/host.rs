//! Capabilities a UI host injects into [`crate::VirtualList`].
//!
//! The list holds no UI objects. It calls into these traits to move the real scroll container,
//! to ask for a callback on the next display refresh, and to hand over the slice to draw.

use crate::{ScrollCommand, VisibleWindow};

/// The host's scrollable surface.
pub trait ScrollSurface {
    /// Moves the scroll container. Offsets beyond the scrollable range must be clamped by the
    /// surface. The resulting offset is expected to come back through
    /// `VirtualList::on_scroll`, possibly asynchronously.
    fn scroll_to(&mut self, command: ScrollCommand);
}

/// The host's next-paint scheduling primitive.
pub trait FrameScheduler {
    /// Requests a single call to `VirtualList::run_frame` before the next display refresh.
    ///
    /// The list guarantees at most one outstanding request at a time.
    fn request_frame(&mut self);
}

/// Turns a render pass into on-screen nodes.
pub trait Renderer<T> {
    fn render(&mut self, pass: RenderPass<'_, T>);
}

/// Everything a [`crate::VirtualList`] needs from its host.
pub trait Host<T>: ScrollSurface + FrameScheduler + Renderer<T> {}

impl<T, H: ScrollSurface + FrameScheduler + Renderer<T>> Host<T> for H {}

/// One render pass handed to the host renderer.
#[derive(Debug)]
pub struct RenderPass<'a, T> {
    /// Height of the full content block, so the scrollbar is sized for every item.
    pub content_height: u64,
    pub show_scrollbar: bool,
    pub content: RenderContent<'a, T>,
}

impl<T> Clone for RenderPass<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderPass<'_, T> {}

/// What goes inside the content block.
#[derive(Debug)]
pub enum RenderContent<'a, T> {
    /// The viewport has not been measured: render only the structural wrapper.
    Unprepared,
    /// The item sequence is empty: render the empty-state placeholder.
    Empty,
    Items(VisibleSlice<'a, T>),
}

impl<T> Clone for RenderContent<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RenderContent<'_, T> {}

impl<'a, T> RenderContent<'a, T> {
    pub fn items(&self) -> Option<VisibleSlice<'a, T>> {
        match self {
            Self::Items(slice) => Some(*slice),
            _ => None,
        }
    }
}

/// The materialized part of the item sequence.
#[derive(Debug)]
pub struct VisibleSlice<'a, T> {
    /// Shift applied to the rendered block so `items[0]` lands at its real position.
    pub translate_offset: u64,
    /// Logical index of `items[0]`.
    pub start_index: usize,
    pub items: &'a [T],
}

impl<T> Clone for VisibleSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for VisibleSlice<'_, T> {}

impl<'a, T> VisibleSlice<'a, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn window(&self) -> Option<VisibleWindow> {
        (!self.items.is_empty()).then(|| VisibleWindow {
            start_index: self.start_index,
            end_index: self.start_index + self.items.len() - 1,
        })
    }

    /// Items paired with their logical index.
    pub fn iter(self) -> impl Iterator<Item = (usize, &'a T)> {
        let start = self.start_index;
        self.items
            .iter()
            .enumerate()
            .map(move |(i, item)| (start + i, item))
    }
}
