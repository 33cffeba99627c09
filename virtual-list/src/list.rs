use alloc::sync::Arc;

use crate::geometry;
use crate::host::{Host, RenderContent, RenderPass, VisibleSlice};
use crate::key::ItemKey;
use crate::scroll::{ScrollController, ScrollTarget, ScrollToOptions};
use crate::{
    KeyIndex, Layout, ResizeEvent, ScrollBehavior, ScrollCommand, ScrollEvent, ViewportState,
    VirtualListOptions, VisibleWindow,
};

/// Inputs that fully determine a render pass. Two equal keys produce identical passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PassKey {
    items_generation: u64,
    layout: Layout,
    show_scrollbar: bool,
    content: ContentKey,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContentKey {
    Unprepared,
    Empty,
    Window(VisibleWindow),
}

fn content_key(layout: &Layout, count: usize, viewport: ViewportState) -> ContentKey {
    if !viewport.is_prepared() {
        return ContentKey::Unprepared;
    }
    match geometry::visible_window(layout, count, viewport) {
        Some(window) => ContentKey::Window(window),
        None => ContentKey::Empty,
    }
}

fn content_for<'a, T>(items: &'a [T], layout: &Layout, key: ContentKey) -> RenderContent<'a, T> {
    match key {
        ContentKey::Unprepared => RenderContent::Unprepared,
        ContentKey::Empty => RenderContent::Empty,
        ContentKey::Window(window) => RenderContent::Items(VisibleSlice {
            translate_offset: geometry::translate_offset(window.start_index, layout.item_size),
            start_index: window.start_index,
            items: &items[window.start_index..=window.end_index],
        }),
    }
}

/// A windowed list bound to a UI host.
///
/// The list owns the viewport state and decides what to render; the host (see
/// [`crate::host`]) owns the actual scroll container and nodes. Adapters drive it by calling:
/// - `on_resize` whenever the viewport height is measured (the first call prepares the list);
/// - `on_scroll` for every scroll event of the container;
/// - `run_frame` when a frame requested through `FrameScheduler::request_frame` comes due.
///
/// Scroll events only record the offset. The recomputation runs in the next frame, so any
/// number of scroll events between two refreshes costs a single render.
#[derive(Debug)]
pub struct VirtualList<T, K, H> {
    options: VirtualListOptions<T, K>,
    keys: KeyIndex<K>,
    scroll: ScrollController,
    host: H,
    frame_pending: bool,
    items_generation: u64,
    last_pass: Option<PassKey>,
}

impl<T, K: ItemKey, H: Host<T>> VirtualList<T, K, H> {
    /// Mounts a list: builds the key index and renders the (unprepared) wrapper.
    pub fn new(options: VirtualListOptions<T, K>, host: H) -> Self {
        vdebug!(
            count = options.items.len(),
            item_size = options.layout.item_size,
            "VirtualList::new"
        );
        let keys = KeyIndex::from_items(&options.items[..], &*options.get_key);
        let mut list = Self {
            options,
            keys,
            scroll: ScrollController::new(),
            host,
            frame_pending: false,
            items_generation: 0,
            last_pass: None,
        };
        list.render();
        list
    }

    pub fn options(&self) -> &VirtualListOptions<T, K> {
        &self.options
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.options.items
    }

    pub fn count(&self) -> usize {
        self.options.items.len()
    }

    pub fn layout(&self) -> Layout {
        self.options.layout
    }

    pub fn key_index(&self) -> &KeyIndex<K> {
        &self.keys
    }

    pub fn index_of_key(&self, key: &K) -> Option<usize> {
        self.keys.get(key)
    }

    pub fn viewport_state(&self) -> ViewportState {
        self.scroll.state()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll.scroll_offset()
    }

    pub fn viewport_height(&self) -> Option<u32> {
        self.scroll.viewport_height()
    }

    pub fn is_prepared(&self) -> bool {
        self.scroll.is_prepared()
    }

    /// Whether a frame was requested and `run_frame` has not run yet.
    pub fn is_frame_pending(&self) -> bool {
        self.frame_pending
    }

    pub fn scroll_controller(&self) -> &ScrollController {
        &self.scroll
    }

    /// The window for the current viewport state, or `None` when nothing is rendered.
    ///
    /// This reflects the latest recorded offset, even if the frame that renders it is still
    /// pending.
    pub fn visible_window(&self) -> Option<VisibleWindow> {
        geometry::visible_window(&self.options.layout, self.count(), self.scroll.state())
    }

    pub fn content_height(&self) -> u64 {
        geometry::content_height(&self.options.layout, self.count())
    }

    pub fn translate_offset(&self) -> u64 {
        self.visible_window().map_or(0, |w| {
            geometry::translate_offset(w.start_index, self.options.layout.item_size)
        })
    }

    /// What a render pass for the current state would contain.
    pub fn render_content(&self) -> RenderContent<'_, T> {
        let key = content_key(&self.options.layout, self.count(), self.scroll.state());
        content_for(&self.options.items[..], &self.options.layout, key)
    }

    pub fn visible_items(&self) -> Option<VisibleSlice<'_, T>> {
        self.render_content().items()
    }

    /// Replaces the item sequence.
    ///
    /// The key index is rebuilt when `items` is a different allocation than the current one.
    pub fn set_items(&mut self, items: impl Into<Arc<[T]>>) {
        let items = items.into();
        if Arc::ptr_eq(&self.options.items, &items) {
            return;
        }
        self.options.items = items;
        self.sequence_changed();
        self.render();
    }

    pub fn set_layout(&mut self, layout: Layout) {
        if self.options.layout == layout {
            return;
        }
        self.options.layout = layout;
        self.render();
    }

    pub fn set_padding(&mut self, padding_top: u32, padding_bottom: u32) {
        self.set_layout(self.options.layout.with_padding(padding_top, padding_bottom));
    }

    pub fn set_show_scrollbar(&mut self, show_scrollbar: bool) {
        self.options.show_scrollbar = show_scrollbar;
        self.render();
    }

    pub fn set_on_scroll(
        &mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
    }

    pub fn set_on_resize(
        &mut self,
        on_resize: Option<impl Fn(ResizeEvent) + Send + Sync + 'static>,
    ) {
        self.options.on_resize = on_resize.map(|f| Arc::new(f) as _);
    }

    /// Replaces all options at once and re-renders.
    ///
    /// The key index is rebuilt only when the item sequence or the key function changed
    /// identity. The default scroll target is a mount-time setting and is not re-applied.
    pub fn set_options(&mut self, options: VirtualListOptions<T, K>) {
        let items_unchanged = Arc::ptr_eq(&self.options.items, &options.items);
        let get_key_unchanged = Arc::ptr_eq(&self.options.get_key, &options.get_key);
        self.options = options;
        vtrace!(
            count = self.options.items.len(),
            items_unchanged,
            get_key_unchanged,
            "VirtualList::set_options"
        );
        if !items_unchanged || !get_key_unchanged {
            self.sequence_changed();
        }
        self.render();
    }

    /// Handles a scroll event from the host container.
    ///
    /// The offset is recorded immediately; the recomputation is deferred to the next frame and
    /// at most one frame is requested at a time.
    pub fn on_scroll(&mut self, scroll_offset: u64) {
        vtrace!(scroll_offset, frame_pending = self.frame_pending, "on_scroll");
        self.scroll.record_scroll(scroll_offset);
        if !self.frame_pending {
            self.frame_pending = true;
            self.host.request_frame();
        }
        if let Some(cb) = &self.options.on_scroll {
            cb(ScrollEvent { scroll_offset });
        }
    }

    /// Runs the deferred recomputation requested by `on_scroll`.
    ///
    /// Returns `true` if a new pass was sent to the renderer.
    pub fn run_frame(&mut self) -> bool {
        self.frame_pending = false;
        self.render()
    }

    /// Handles a viewport height measurement.
    ///
    /// Applied synchronously. The first measurement prepares the list, after which the default
    /// scroll target (if any) is applied once.
    pub fn on_resize(&mut self, viewport_height: u32) {
        vtrace!(viewport_height, "on_resize");
        let prepared_now = self.scroll.record_resize(viewport_height);
        self.render();
        if prepared_now {
            vdebug!(viewport_height, "VirtualList prepared");
            self.apply_default_scroll();
        }
        if let Some(cb) = &self.options.on_resize {
            cb(ResizeEvent { viewport_height });
        }
    }

    /// Issues a programmatic scroll.
    ///
    /// Returns `true` if a command was sent to the surface; `false` for no-ops (no recognized
    /// option, unknown key, or an item that is already fully visible). The offset itself only
    /// changes once the surface reports back through `on_scroll`.
    pub fn scroll_to(&mut self, request: &ScrollToOptions<K>) -> bool {
        let command = self
            .scroll
            .resolve(request, &self.options.layout, &self.keys);
        self.issue(command)
    }

    /// Shorthand for a pixel scroll on both axes.
    pub fn scroll_to_xy(&mut self, left: u64, top: u64) -> bool {
        self.issue(Some(ScrollCommand {
            left: Some(left),
            top: Some(top),
            behavior: ScrollBehavior::Auto,
        }))
    }

    fn issue(&mut self, command: Option<ScrollCommand>) -> bool {
        let Some(command) = command else {
            return false;
        };
        vtrace!(top = ?command.top, left = ?command.left, "scroll_to");
        self.host.scroll_to(command);
        true
    }

    fn apply_default_scroll(&mut self) {
        let target = if let Some(index) = self.options.default_scroll_index {
            ScrollTarget::Index(index)
        } else if let Some(key) = &self.options.default_scroll_key {
            ScrollTarget::Key(key)
        } else {
            return;
        };
        let command = self.scroll.command_for(
            target,
            ScrollBehavior::Auto,
            true,
            &self.options.layout,
            &self.keys,
        );
        if let Some(command) = command {
            self.host.scroll_to(command);
        }
    }

    fn sequence_changed(&mut self) {
        self.keys.rebuild(&self.options.items[..], &*self.options.get_key);
        self.items_generation = self.items_generation.wrapping_add(1);
    }

    fn render(&mut self) -> bool {
        let layout = self.options.layout;
        let key = PassKey {
            items_generation: self.items_generation,
            layout,
            show_scrollbar: self.options.show_scrollbar,
            content: content_key(&layout, self.options.items.len(), self.scroll.state()),
        };
        if self.last_pass == Some(key) {
            return false;
        }
        self.last_pass = Some(key);

        let pass = RenderPass {
            content_height: geometry::content_height(&layout, self.options.items.len()),
            show_scrollbar: key.show_scrollbar,
            content: content_for(&self.options.items[..], &layout, key.content),
        };
        self.host.render(pass);
        true
    }
}

impl<T, K: ItemKey + Clone, H: Host<T>> VirtualList<T, K, H> {
    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualListOptions<T, K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }
}
