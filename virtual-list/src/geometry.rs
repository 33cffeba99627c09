//! Pure windowing arithmetic for uniform-size lists.
//!
//! Every function here is stateless: identical inputs always produce identical outputs, so
//! callers are free to recompute on every event instead of caching.

use crate::{Layout, ViewportState, VisibleWindow};

fn to_index(v: u64) -> usize {
    usize::try_from(v).unwrap_or(usize::MAX)
}

/// First index to materialize for `scroll_offset`.
///
/// One extra item above the viewport is included to mask render latency while scrolling up.
pub fn start_index(scroll_offset: u64, padding_top: u32, item_size: u32) -> usize {
    let unit = item_size.max(1) as u64;
    let in_items = scroll_offset.saturating_sub(padding_top as u64);
    to_index((in_items / unit).saturating_sub(1))
}

/// Number of items after `start_index` needed to cover the viewport, plus one trailing buffer
/// item.
pub fn visible_count(
    scroll_offset: u64,
    viewport_height: u32,
    layout: &Layout,
    count: usize,
) -> usize {
    let unit = layout.unit();
    let remaining = layout
        .items_end(count)
        .saturating_sub(scroll_offset)
        .min(viewport_height as u64);
    to_index(remaining.div_ceil(unit)).saturating_add(1)
}

/// Last index to materialize (inclusive). `count` must be non-zero.
pub fn end_index(start_index: usize, visible_count: usize, count: usize) -> usize {
    debug_assert!(count > 0, "end_index: empty list has no end index");
    start_index
        .saturating_add(visible_count)
        .min(count.saturating_sub(1))
}

/// Computes the window to materialize.
///
/// Returns `None` when there is nothing to render: the list is empty or the viewport has not
/// been measured yet.
pub fn visible_window(
    layout: &Layout,
    count: usize,
    viewport: ViewportState,
) -> Option<VisibleWindow> {
    let viewport_height = viewport.viewport_height?;
    if count == 0 {
        return None;
    }

    let offset = viewport.scroll_offset;
    let start = start_index(offset, layout.padding_top, layout.item_size);
    let end = end_index(
        start,
        visible_count(offset, viewport_height, layout, count),
        count,
    );

    // Offsets past the last item (large bottom padding, stale events) would otherwise start
    // after the end.
    Some(VisibleWindow {
        start_index: start.min(end),
        end_index: end,
    })
}

/// Total content height; sizes the scrollbar.
pub fn content_height(layout: &Layout, count: usize) -> u64 {
    layout.content_height(count)
}

/// Distance the rendered block is shifted down so the item at `start_index` lands at its true
/// position within the full-height content.
pub fn translate_offset(start_index: usize, item_size: u32) -> u64 {
    (start_index as u64).saturating_mul(item_size.max(1) as u64)
}

/// Largest offset the scroll container can reach.
pub fn max_scroll_offset(content_height: u64, viewport_height: u32) -> u64 {
    content_height.saturating_sub(viewport_height as u64)
}
