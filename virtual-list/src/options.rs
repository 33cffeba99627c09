use alloc::sync::Arc;

use crate::{Layout, ResizeEvent, ScrollEvent};

/// Returns the stable key of an item.
pub type KeyFn<T, K> = Arc<dyn Fn(&T) -> K + Send + Sync>;

/// Observer fired after a scroll event was recorded.
pub type OnScrollCallback = Arc<dyn Fn(ScrollEvent) + Send + Sync>;

/// Observer fired after a resize report was applied.
pub type OnResizeCallback = Arc<dyn Fn(ResizeEvent) + Send + Sync>;

/// Items that carry their own stable identity.
pub trait Keyed {
    type Key;

    fn key(&self) -> Self::Key;
}

/// Configuration for [`crate::VirtualList`].
///
/// Cheap to clone: items and closures are stored in `Arc`s, so adapters can replace a few fields
/// and call `VirtualList::set_options` without copying the item sequence.
pub struct VirtualListOptions<T, K> {
    /// The ordered item sequence. Replacing the `Arc` (not mutating through it) is what marks
    /// the sequence as changed.
    pub items: Arc<[T]>,
    pub get_key: KeyFn<T, K>,
    pub layout: Layout,

    /// Cosmetic; passed through to the renderer.
    pub show_scrollbar: bool,

    /// Item to bring into view after the first layout. Takes precedence over
    /// `default_scroll_key`.
    pub default_scroll_index: Option<usize>,
    /// Key of the item to bring into view after the first layout.
    pub default_scroll_key: Option<K>,

    pub on_scroll: Option<OnScrollCallback>,
    pub on_resize: Option<OnResizeCallback>,
}

impl<T, K: Clone> Clone for VirtualListOptions<T, K> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            get_key: Arc::clone(&self.get_key),
            layout: self.layout,
            show_scrollbar: self.show_scrollbar,
            default_scroll_index: self.default_scroll_index,
            default_scroll_key: self.default_scroll_key.clone(),
            on_scroll: self.on_scroll.clone(),
            on_resize: self.on_resize.clone(),
        }
    }
}

impl<T: Keyed<Key = K> + 'static, K> VirtualListOptions<T, K> {
    /// Creates options for items implementing [`Keyed`].
    pub fn new(items: impl Into<Arc<[T]>>, item_size: u32) -> Self {
        Self::new_with_key(items, item_size, T::key)
    }
}

impl<T, K> VirtualListOptions<T, K> {
    /// Creates options with a custom key mapping.
    ///
    /// `get_key` must return a stable identity that is unique within one item sequence.
    pub fn new_with_key(
        items: impl Into<Arc<[T]>>,
        item_size: u32,
        get_key: impl Fn(&T) -> K + Send + Sync + 'static,
    ) -> Self {
        Self {
            items: items.into(),
            get_key: Arc::new(get_key),
            layout: Layout::new(item_size),
            show_scrollbar: true,
            default_scroll_index: None,
            default_scroll_key: None,
            on_scroll: None,
            on_resize: None,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn with_items(mut self, items: impl Into<Arc<[T]>>) -> Self {
        self.items = items.into();
        self
    }

    pub fn with_get_key(mut self, get_key: impl Fn(&T) -> K + Send + Sync + 'static) -> Self {
        self.get_key = Arc::new(get_key);
        self
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_item_size(mut self, item_size: u32) -> Self {
        self.layout.item_size = Layout::new(item_size).item_size;
        self
    }

    pub fn with_padding(mut self, padding_top: u32, padding_bottom: u32) -> Self {
        self.layout = self.layout.with_padding(padding_top, padding_bottom);
        self
    }

    pub fn with_show_scrollbar(mut self, show_scrollbar: bool) -> Self {
        self.show_scrollbar = show_scrollbar;
        self
    }

    pub fn with_default_scroll_index(mut self, index: Option<usize>) -> Self {
        self.default_scroll_index = index;
        self
    }

    pub fn with_default_scroll_key(mut self, key: Option<K>) -> Self {
        self.default_scroll_key = key;
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_resize(
        mut self,
        on_resize: Option<impl Fn(ResizeEvent) + Send + Sync + 'static>,
    ) -> Self {
        self.on_resize = on_resize.map(|f| Arc::new(f) as _);
        self
    }
}

impl<T, K: core::fmt::Debug> core::fmt::Debug for VirtualListOptions<T, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("count", &self.items.len())
            .field("layout", &self.layout)
            .field("show_scrollbar", &self.show_scrollbar)
            .field("default_scroll_index", &self.default_scroll_index)
            .field("default_scroll_key", &self.default_scroll_key)
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_resize", &self.on_resize.is_some())
            .finish_non_exhaustive()
    }
}
