use virtual_list::{FrameScheduler, RenderPass, Renderer, ScrollCommand, ScrollSurface};

use crate::{FrameQueue, RenderLog, SimulatedSurface};

/// A complete headless host: simulated scroll surface, frame queue and render log.
///
/// Render passes also keep the surface's content height in sync, the way a real layout would
/// resize the scroll content.
#[derive(Clone, Debug, Default)]
pub struct SimHost {
    pub surface: SimulatedSurface,
    pub frames: FrameQueue,
    pub log: RenderLog,
}

impl SimHost {
    pub fn new(surface: SimulatedSurface, frames: FrameQueue) -> Self {
        Self {
            surface,
            frames,
            log: RenderLog::new(),
        }
    }

    pub fn with_log(mut self, log: RenderLog) -> Self {
        self.log = log;
        self
    }
}

impl ScrollSurface for SimHost {
    fn scroll_to(&mut self, command: ScrollCommand) {
        self.surface.scroll_to(command);
    }
}

impl FrameScheduler for SimHost {
    fn request_frame(&mut self) {
        self.frames.request_frame();
    }
}

impl<T> Renderer<T> for SimHost {
    fn render(&mut self, pass: RenderPass<'_, T>) {
        self.surface.set_content_height(pass.content_height);
        self.log.render(pass);
    }
}
