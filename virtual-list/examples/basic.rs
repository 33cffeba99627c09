// Example: a minimal host that prints what it is asked to draw.
use virtual_list::{
    FrameScheduler, Keyed, RenderContent, RenderPass, Renderer, ScrollCommand, ScrollSurface,
    ScrollToOptions, VirtualList, VirtualListOptions,
};

struct Track {
    id: u64,
    title: String,
}

impl Keyed for Track {
    type Key = u64;

    fn key(&self) -> u64 {
        self.id
    }
}

#[derive(Default)]
struct PrintHost {
    frame_requested: bool,
    last_command: Option<ScrollCommand>,
}

impl ScrollSurface for PrintHost {
    fn scroll_to(&mut self, command: ScrollCommand) {
        println!("scroll_to {command:?}");
        self.last_command = Some(command);
    }
}

impl FrameScheduler for PrintHost {
    fn request_frame(&mut self) {
        self.frame_requested = true;
    }
}

impl Renderer<Track> for PrintHost {
    fn render(&mut self, pass: RenderPass<'_, Track>) {
        match pass.content {
            RenderContent::Unprepared => println!("render: waiting for a viewport height"),
            RenderContent::Empty => println!("render: no tracks"),
            RenderContent::Items(slice) => {
                println!(
                    "render: height={} translate={} rows={}",
                    pass.content_height,
                    slice.translate_offset,
                    slice.len()
                );
                if let Some((index, first)) = slice.iter().next() {
                    println!("  first row #{index}: {}", first.title);
                }
            }
        }
    }
}

fn main() {
    let tracks: Vec<Track> = (0..1_000_000u64)
        .map(|id| Track {
            id,
            title: format!("Track {id}"),
        })
        .collect();

    let mut list = VirtualList::new(
        VirtualListOptions::new(tracks, 30).with_padding(8, 8),
        PrintHost::default(),
    );

    list.on_resize(600);

    // A burst of scroll events costs one render, on the next frame.
    for offset in [100, 4_000, 123_456] {
        list.on_scroll(offset);
    }
    if list.host().frame_requested {
        list.host_mut().frame_requested = false;
        list.run_frame();
    }

    list.scroll_to(&ScrollToOptions::for_key(999_999));
    if let Some(top) = list.host().last_command.and_then(|c| c.top) {
        // A real surface would fire this scroll event asynchronously.
        list.on_scroll(top);
        list.run_frame();
    }
}
