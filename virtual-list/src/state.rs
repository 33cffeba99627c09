/// Scroll offset and viewport height as last observed from the host.
///
/// `viewport_height == None` means no measurement has arrived yet ("unprepared"). Nothing can be
/// sized or positioned before that, so the visible window is empty.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub scroll_offset: u64,
    pub viewport_height: Option<u32>,
}

impl ViewportState {
    pub fn is_prepared(&self) -> bool {
        self.viewport_height.is_some()
    }

    /// Bottom edge of the viewport. An unprepared viewport has zero height.
    pub fn scroll_end(&self) -> u64 {
        self.scroll_offset
            .saturating_add(self.viewport_height.unwrap_or(0) as u64)
    }
}
