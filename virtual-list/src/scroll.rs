use crate::key::ItemKey;
use crate::{KeyIndex, Layout, ScrollBehavior, ScrollCommand, ScrollPosition, ViewportState};

/// A programmatic scroll request.
///
/// All recognized options live in one struct so callers can set several; only the first
/// recognized one is honored, in this order: pixel offset (`left`/`top`), `index`, `key`,
/// `position`. A request with none of them set does nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToOptions<K> {
    pub left: Option<u64>,
    pub top: Option<u64>,
    pub index: Option<usize>,
    pub key: Option<K>,
    pub position: Option<ScrollPosition>,
    pub behavior: ScrollBehavior,
    /// Minimal-motion scrolling for `index`/`key` requests (default `true`).
    pub debounce: bool,
}

impl<K> Default for ScrollToOptions<K> {
    fn default() -> Self {
        Self {
            left: None,
            top: None,
            index: None,
            key: None,
            position: None,
            behavior: ScrollBehavior::Auto,
            debounce: true,
        }
    }
}

impl<K> ScrollToOptions<K> {
    pub fn for_offset(top: u64) -> Self {
        Self {
            top: Some(top),
            ..Self::default()
        }
    }

    pub fn for_index(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    pub fn for_key(key: K) -> Self {
        Self {
            key: Some(key),
            ..Self::default()
        }
    }

    pub fn for_position(position: ScrollPosition) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn with_left(mut self, left: u64) -> Self {
        self.left = Some(left);
        self
    }

    pub fn with_top(mut self, top: u64) -> Self {
        self.top = Some(top);
        self
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_key(mut self, key: K) -> Self {
        self.key = Some(key);
        self
    }

    pub fn with_position(mut self, position: ScrollPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn smooth(self) -> Self {
        self.with_behavior(ScrollBehavior::Smooth)
    }

    pub fn with_debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }

    /// The navigation mode this request resolves to, after precedence.
    pub fn target(&self) -> Option<ScrollTarget<'_, K>> {
        if self.left.is_some() || self.top.is_some() {
            return Some(ScrollTarget::Offset {
                left: self.left,
                top: self.top,
            });
        }
        if let Some(index) = self.index {
            return Some(ScrollTarget::Index(index));
        }
        if let Some(key) = &self.key {
            return Some(ScrollTarget::Key(key));
        }
        self.position.map(ScrollTarget::Position)
    }
}

/// A single resolved navigation mode.
#[derive(Debug, PartialEq, Eq)]
pub enum ScrollTarget<'a, K> {
    Offset {
        left: Option<u64>,
        top: Option<u64>,
    },
    Index(usize),
    Key(&'a K),
    Position(ScrollPosition),
}

impl<K> Clone for ScrollTarget<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for ScrollTarget<'_, K> {}

/// Owns the viewport state and turns scroll requests into imperative scroll commands.
///
/// The controller never moves the offset itself: commands are sent to the host surface, and
/// the resulting offset comes back through the regular scroll-event path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollController {
    state: ViewportState,
}

impl ScrollController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewportState {
        self.state
    }

    pub fn scroll_offset(&self) -> u64 {
        self.state.scroll_offset
    }

    pub fn viewport_height(&self) -> Option<u32> {
        self.state.viewport_height
    }

    pub fn is_prepared(&self) -> bool {
        self.state.is_prepared()
    }

    /// Records an offset reported by the host surface.
    pub fn record_scroll(&mut self, offset: u64) {
        self.state.scroll_offset = offset;
    }

    /// Records a viewport height measurement.
    ///
    /// Returns `true` when this report moved the viewport out of the unprepared state.
    pub fn record_resize(&mut self, height: u32) -> bool {
        let was_prepared = self.state.is_prepared();
        self.state.viewport_height = Some(height);
        !was_prepared
    }

    /// Offset that brings `index` into view, or `None` when no scroll is needed.
    ///
    /// With `debounce`, the motion is minimal:
    /// - an item above the viewport is aligned to the top edge;
    /// - a fully visible item does not move;
    /// - an item below the viewport is aligned to the bottom edge.
    ///
    /// An item taller than the viewport is aligned to the top edge instead of the bottom edge
    /// so its start stays visible.
    pub fn index_offset(&self, layout: &Layout, index: usize, debounce: bool) -> Option<u64> {
        let top = layout.item_top(index);
        if !debounce {
            return Some(top);
        }

        let cur = self.state.scroll_offset;
        let bottom = top.saturating_add(layout.unit());
        if top <= cur {
            Some(top)
        } else if bottom <= self.state.scroll_end() {
            None
        } else {
            let view = self.state.viewport_height.unwrap_or(0) as u64;
            Some(bottom.saturating_sub(view).min(top))
        }
    }

    /// Resolves `target` into a command for the host surface.
    ///
    /// Returns `None` for no-ops: an unknown key, or an item that is already fully visible.
    pub fn command_for<K: ItemKey>(
        &self,
        target: ScrollTarget<'_, K>,
        behavior: ScrollBehavior,
        debounce: bool,
        layout: &Layout,
        keys: &KeyIndex<K>,
    ) -> Option<ScrollCommand> {
        match target {
            ScrollTarget::Offset { left, top } => Some(ScrollCommand {
                left,
                top,
                behavior,
            }),
            ScrollTarget::Index(index) => self
                .index_offset(layout, index, debounce)
                .map(|top| ScrollCommand::top(top, behavior)),
            ScrollTarget::Key(key) => {
                let Some(index) = keys.get(key) else {
                    vtrace!("scroll_to: unknown key");
                    return None;
                };
                self.command_for(ScrollTarget::Index(index), behavior, debounce, layout, keys)
            }
            ScrollTarget::Position(ScrollPosition::Top) => Some(ScrollCommand::top(0, behavior)),
            ScrollTarget::Position(ScrollPosition::Bottom) => {
                Some(ScrollCommand::top(u64::MAX, behavior))
            }
        }
    }

    /// Resolves a full request, applying option precedence.
    pub fn resolve<K: ItemKey>(
        &self,
        request: &ScrollToOptions<K>,
        layout: &Layout,
        keys: &KeyIndex<K>,
    ) -> Option<ScrollCommand> {
        let target = request.target()?;
        self.command_for(target, request.behavior, request.debounce, layout, keys)
    }
}
