use virtual_list::{ScrollToOptions, VirtualListOptions};
use virtual_list_adapter::{Driver, Easing, FrameQueue, RenderedContent, SimHost, SimulatedSurface};

fn main() {
    // Example: a headless event loop with smooth scrolling and a 30 fps frame timer.
    let rows: Vec<u32> = (0..10_000).collect();
    let options = VirtualListOptions::new_with_key(rows, 20, |row: &u32| *row);
    let host = SimHost::new(
        SimulatedSurface::new(240).with_easing(Easing::EaseOutCubic),
        FrameQueue::with_min_interval(33),
    );
    let mut d = Driver::new(options, host);
    d.resize(400);

    d.scroll_to(&ScrollToOptions::for_index(2_000).smooth());

    let mut now_ms = 0u64;
    while d.is_busy() {
        let tick = d.tick(now_ms);
        if tick.rendered {
            if let Some(RenderedContent::Items { window, .. }) =
                d.host().log.last().map(|s| s.content)
            {
                println!(
                    "t={now_ms} offset={} window={:?}",
                    d.list().scroll_offset(),
                    window
                );
            }
        }
        now_ms += 16;
    }

    println!(
        "done: offset={} passes={}",
        d.list().scroll_offset(),
        d.host().log.passes()
    );
}
