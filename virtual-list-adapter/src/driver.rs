use virtual_list::{ItemKey, ResizeBridge, ScrollToOptions, VirtualList, VirtualListOptions};

use crate::SimHost;

/// Result of one [`Driver::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tick {
    /// Scroll offset delivered to the list during this tick, if any.
    pub scrolled: Option<u64>,
    /// Whether a frame ran during this tick.
    pub frame: bool,
    /// Whether that frame produced a new render pass.
    pub rendered: bool,
}

/// A framework-neutral event loop around a [`VirtualList`] and a [`SimHost`].
///
/// Adapters drive it by calling:
/// - `resize` when the viewport is measured;
/// - `user_scroll` for wheel/drag input;
/// - `tick(now_ms)` on every loop iteration, which delivers scroll events from the surface
///   and runs due frames.
#[derive(Debug)]
pub struct Driver<T, K> {
    list: VirtualList<T, K, SimHost>,
    resize: ResizeBridge,
}

impl<T, K: ItemKey> Driver<T, K> {
    pub fn new(options: VirtualListOptions<T, K>, host: SimHost) -> Self {
        Self {
            list: VirtualList::new(options, host),
            resize: ResizeBridge::new(),
        }
    }

    pub fn list(&self) -> &VirtualList<T, K, SimHost> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut VirtualList<T, K, SimHost> {
        &mut self.list
    }

    pub fn host(&self) -> &SimHost {
        self.list.host()
    }

    pub fn into_list(self) -> VirtualList<T, K, SimHost> {
        self.list
    }

    /// Reports a viewport measurement. Unchanged heights are dropped.
    pub fn resize(&mut self, viewport_height: u32) -> bool {
        let Some(height) = self.resize.report(viewport_height) else {
            return false;
        };
        self.list.host_mut().surface.set_viewport_height(height);
        self.list.on_resize(height);
        true
    }

    /// Simulates user scrolling; the event reaches the list on the next `tick`.
    pub fn user_scroll(&mut self, offset: u64) {
        self.list.host_mut().surface.user_scroll(offset);
    }

    /// Programmatic scroll; the resulting offset reaches the list on later ticks.
    pub fn scroll_to(&mut self, request: &ScrollToOptions<K>) -> bool {
        self.list.scroll_to(request)
    }

    /// Whether anything is still in flight: an animation, an unreported offset, or a pending
    /// frame.
    pub fn is_busy(&self) -> bool {
        let host = self.list.host();
        host.surface.is_animating()
            || host.surface.has_unreported_scroll()
            || self.list.is_frame_pending()
    }

    pub fn tick(&mut self, now_ms: u64) -> Tick {
        let mut tick = Tick::default();

        if let Some(offset) = self.list.host_mut().surface.tick(now_ms) {
            self.list.on_scroll(offset);
            tick.scrolled = Some(offset);
        }

        if self.list.host_mut().frames.poll(now_ms) {
            tick.frame = true;
            tick.rendered = self.list.run_frame();
        }

        vtrace!(now_ms, scrolled = ?tick.scrolled, rendered = tick.rendered, "Driver::tick");
        tick
    }

    /// Ticks every `frame_ms` starting at `now_ms` until nothing is in flight.
    ///
    /// Gives up after `max_ticks`. Returns the time of the last tick (`now_ms` when no tick ran).
    pub fn settle(&mut self, now_ms: u64, frame_ms: u64, max_ticks: usize) -> u64 {
        let mut last_ms = now_ms;
        let mut next_ms = now_ms;
        for _ in 0..max_ticks {
            self.tick(next_ms);
            last_ms = next_ms;
            if !self.is_busy() {
                break;
            }
            next_ms = next_ms.saturating_add(frame_ms.max(1));
        }
        last_ms
    }
}
