use alloc::vec::Vec;

use virtual_list::{RenderContent, RenderPass, Renderer, VisibleWindow};

/// What a render pass asked the host to draw, without borrowing the items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RenderedContent {
    Unprepared,
    Empty,
    Items {
        translate_offset: u64,
        window: VisibleWindow,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderSnapshot {
    pub content_height: u64,
    pub show_scrollbar: bool,
    pub content: RenderedContent,
}

impl<T> From<RenderPass<'_, T>> for RenderSnapshot {
    fn from(pass: RenderPass<'_, T>) -> Self {
        let content = match pass.content {
            RenderContent::Unprepared => RenderedContent::Unprepared,
            RenderContent::Empty => RenderedContent::Empty,
            RenderContent::Items(slice) => match slice.window() {
                Some(window) => RenderedContent::Items {
                    translate_offset: slice.translate_offset,
                    window,
                },
                None => RenderedContent::Empty,
            },
        };
        Self {
            content_height: pass.content_height,
            show_scrollbar: pass.show_scrollbar,
            content,
        }
    }
}

/// A renderer that keeps the latest pass and counts passes.
///
/// Useful for headless hosts and tests; a real renderer would draw `pass` instead.
#[derive(Clone, Debug, Default)]
pub struct RenderLog {
    last: Option<RenderSnapshot>,
    passes: u64,
    history: Option<Vec<RenderSnapshot>>,
}

impl RenderLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also keeps every pass, in order.
    pub fn with_history() -> Self {
        Self {
            history: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn last(&self) -> Option<&RenderSnapshot> {
        self.last.as_ref()
    }

    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn history(&self) -> &[RenderSnapshot] {
        self.history.as_deref().unwrap_or(&[])
    }

    pub fn record(&mut self, snapshot: RenderSnapshot) {
        self.passes = self.passes.saturating_add(1);
        if let Some(history) = &mut self.history {
            history.push(snapshot);
        }
        self.last = Some(snapshot);
    }
}

impl<T> Renderer<T> for RenderLog {
    fn render(&mut self, pass: RenderPass<'_, T>) {
        self.record(pass.into());
    }
}
