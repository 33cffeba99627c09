use crate::VirtualList;
use crate::host::Host;
use crate::key::ItemKey;

/// Forwards viewport height measurements from a resize-detection primitive.
///
/// The first report always goes through (it prepares the list); afterwards only changes do.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeBridge {
    last_height: Option<u32>,
}

impl ResizeBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_height(&self) -> Option<u32> {
        self.last_height
    }

    /// Records a content-box height report.
    ///
    /// Returns the height to forward, or `None` when it is unchanged.
    pub fn report(&mut self, height: u32) -> Option<u32> {
        if self.last_height == Some(height) {
            return None;
        }
        self.last_height = Some(height);
        Some(height)
    }

    /// Records a report and forwards it to `list` when it is new.
    ///
    /// Returns `true` when the list was notified.
    pub fn report_to<T, K: ItemKey, H: Host<T>>(
        &mut self,
        list: &mut VirtualList<T, K, H>,
        height: u32,
    ) -> bool {
        let Some(height) = self.report(height) else {
            return false;
        };
        list.on_resize(height);
        true
    }
}
