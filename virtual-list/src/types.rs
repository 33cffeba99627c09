use core::ops::RangeInclusive;

/// Fixed-size layout parameters of a vertical list.
///
/// Every item occupies exactly `item_size` pixels. `padding_top`/`padding_bottom` are added to
/// the content height without holding items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    pub item_size: u32,
    pub padding_top: u32,
    pub padding_bottom: u32,
}

impl Layout {
    /// Creates a layout without padding.
    ///
    /// A zero `item_size` is coerced to `1`.
    pub fn new(item_size: u32) -> Self {
        if item_size == 0 {
            vwarn!("Layout::new: item_size must be positive, using 1");
        }
        Self {
            item_size: item_size.max(1),
            padding_top: 0,
            padding_bottom: 0,
        }
    }

    pub fn with_padding(mut self, padding_top: u32, padding_bottom: u32) -> Self {
        self.padding_top = padding_top;
        self.padding_bottom = padding_bottom;
        self
    }

    /// The item size used by all arithmetic (never zero, even if the field was set to zero).
    pub fn unit(&self) -> u64 {
        self.item_size.max(1) as u64
    }

    /// Pixel offset of the top edge of `index` inside the scroll container.
    pub fn item_top(&self, index: usize) -> u64 {
        (index as u64)
            .saturating_mul(self.unit())
            .saturating_add(self.padding_top as u64)
    }

    /// Pixel offset just past the last item (excludes `padding_bottom`).
    pub fn items_end(&self, count: usize) -> u64 {
        self.item_top(count)
    }

    /// Total scrollable content height for `count` items.
    pub fn content_height(&self, count: usize) -> u64 {
        self.items_end(count)
            .saturating_add(self.padding_bottom as u64)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(1)
    }
}

/// The slice of logical indexes that must be materialized, both ends inclusive.
///
/// An empty window is represented as `None` by the APIs that produce windows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleWindow {
    /// Number of items in the window (never zero).
    pub fn item_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.start_index..=self.end_index).contains(&index)
    }

    pub fn indexes(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// Animation mode forwarded to the host scroll primitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Jump immediately.
    #[default]
    Auto,
    Smooth,
}

/// Named edge of the list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollPosition {
    Top,
    Bottom,
}

/// An imperative scroll command issued to the host scroll surface.
///
/// `None` leaves that axis untouched. Offsets may exceed the scrollable range (e.g. `u64::MAX`
/// for "bottom"); the surface is expected to clamp.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    pub left: Option<u64>,
    pub top: Option<u64>,
    pub behavior: ScrollBehavior,
}

impl ScrollCommand {
    pub fn top(top: u64, behavior: ScrollBehavior) -> Self {
        Self {
            left: None,
            top: Some(top),
            behavior,
        }
    }
}

/// Payload forwarded to the `on_scroll` observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub scroll_offset: u64,
}

/// Payload forwarded to the `on_resize` observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResizeEvent {
    pub viewport_height: u32,
}
