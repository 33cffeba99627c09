use crate::*;

use alloc::vec::Vec;
use virtual_list::{
    Keyed, ScrollBehavior, ScrollCommand, ScrollPosition, ScrollSurface, ScrollToOptions,
    VirtualListOptions, VisibleWindow,
};

#[derive(Clone, Debug)]
struct Message {
    id: u32,
}

impl Keyed for Message {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

fn messages(count: u32) -> Vec<Message> {
    (0..count).map(|id| Message { id }).collect()
}

fn driver(count: u32, item_size: u32) -> Driver<Message, u32> {
    Driver::new(
        VirtualListOptions::new(messages(count), item_size),
        SimHost::new(SimulatedSurface::new(100), FrameQueue::next_frame()),
    )
}

fn last_window(d: &Driver<Message, u32>) -> Option<(u64, VisibleWindow)> {
    match d.host().log.last()?.content {
        RenderedContent::Items {
            translate_offset,
            window,
        } => Some((translate_offset, window)),
        _ => None,
    }
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::EaseInOutCubic, Easing::EaseOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        let mid = easing.sample(0.5);
        assert!(mid > 0.0 && mid < 1.0);
    }
}

#[test]
fn tween_is_monotonic_and_lands_on_target() {
    let tween = Tween::new(0, 10_000_000, 100, 200, Easing::EaseInOutCubic);
    let mut last = 0u64;
    for now_ms in (100..=300).step_by(10) {
        let off = tween.sample(now_ms);
        assert!(off >= last);
        last = off;
    }
    assert!(tween.is_done(300));
    assert_eq!(tween.sample(300), 10_000_000);
    assert_eq!(tween.sample(50), 0);

    let down = Tween::new(500, 100, 0, 100, Easing::Linear);
    assert_eq!(down.sample(50), 300);
    assert_eq!(down.sample(100), 100);
}

#[test]
fn tween_retarget_starts_from_current_position() {
    let mut tween = Tween::new(0, 1000, 0, 100, Easing::Linear);
    tween.retarget(50, 200);
    assert_eq!(tween.from, 500);
    assert_eq!(tween.to, 200);
    assert_eq!(tween.start_ms, 50);
    assert_eq!(tween.sample(150), 200);
}

#[test]
fn surface_clamps_and_reports_asynchronously() {
    let mut s = SimulatedSurface::new(100);
    s.set_content_height(1000);
    s.set_viewport_height(100);

    s.scroll_to(ScrollCommand::top(u64::MAX, ScrollBehavior::Auto));
    assert_eq!(s.offset(), 900);
    assert!(s.has_unreported_scroll());
    assert_eq!(s.tick(0), Some(900));
    assert_eq!(s.tick(16), None);

    // Shrinking content clamps the offset, which is then reported.
    s.set_content_height(500);
    assert_eq!(s.tick(32), Some(400));
}

#[test]
fn surface_smooth_scroll_can_be_retargeted() {
    let mut s = SimulatedSurface::new(100).with_easing(Easing::Linear);
    s.set_content_height(10_000);
    s.set_viewport_height(100);

    s.scroll_to(ScrollCommand::top(800, ScrollBehavior::Smooth));
    assert!(s.is_animating());
    assert_eq!(s.tick(0), None);
    assert_eq!(s.tick(50), Some(400));

    s.scroll_to(ScrollCommand::top(200, ScrollBehavior::Smooth));
    assert_eq!(s.tick(100), Some(300));
    assert_eq!(s.tick(150), Some(200));
    assert!(!s.is_animating());
    assert_eq!(s.tick(200), None);
}

#[test]
fn smooth_scroll_after_idle_starts_on_next_tick() {
    let mut s = SimulatedSurface::new(100).with_easing(Easing::Linear);
    s.set_content_height(10_000);
    s.set_viewport_height(100);
    assert_eq!(s.tick(0), None);

    // No ticks while idle; the animation must not count the idle time.
    s.scroll_to(ScrollCommand::top(8000, ScrollBehavior::Smooth));
    s.scroll_to(ScrollCommand::top(6000, ScrollBehavior::Smooth));
    assert_eq!(s.tick(5000), None);
    assert!(s.is_animating());
    assert_eq!(s.tick(5050), Some(3000));
    assert_eq!(s.tick(5100), Some(6000));
    assert!(!s.is_animating());
}

#[test]
fn user_scroll_cancels_animation() {
    let mut s = SimulatedSurface::new(100);
    s.set_content_height(10_000);
    s.set_viewport_height(100);
    s.scroll_to(ScrollCommand::top(5000, ScrollBehavior::Smooth));
    s.user_scroll(42);
    assert!(!s.is_animating());
    assert_eq!(s.tick(10), Some(42));
}

#[test]
fn frame_queue_latches_requests() {
    use virtual_list::FrameScheduler;

    let mut q = FrameQueue::next_frame();
    assert!(!q.poll(0));
    q.request_frame();
    q.request_frame();
    assert!(q.is_requested());
    assert!(q.poll(0));
    assert!(!q.poll(1));
    assert_eq!(q.frames(), 1);
}

#[test]
fn frame_queue_interval_fallback() {
    use virtual_list::FrameScheduler;

    let mut q = FrameQueue::with_min_interval(32);
    q.request_frame();
    assert!(q.poll(0));
    q.request_frame();
    assert!(!q.poll(16));
    assert!(q.poll(32));
}

#[test]
fn driver_debounced_index_scroll_round_trip() {
    let mut d = driver(1000, 20);
    assert!(d.resize(200));
    assert!(!d.resize(200));

    assert!(d.scroll_to(&ScrollToOptions::for_index(50)));
    // Nothing moves until the surface reports back.
    assert_eq!(d.list().scroll_offset(), 0);

    let tick = d.tick(0);
    assert_eq!(tick.scrolled, Some(820));
    assert!(tick.frame && tick.rendered);
    assert_eq!(d.list().scroll_offset(), 820);
    assert_eq!(
        last_window(&d),
        Some((
            800,
            VisibleWindow {
                start_index: 40,
                end_index: 51,
            }
        ))
    );

    // Already visible now.
    assert!(!d.scroll_to(&ScrollToOptions::for_index(50)));
}

#[test]
fn driver_coalesces_scroll_bursts() {
    let mut d = driver(1000, 20);
    d.resize(200);
    let passes = d.host().log.passes();

    for offset in [100u64, 200, 300, 400] {
        d.user_scroll(offset);
    }
    let tick = d.tick(16);
    assert_eq!(tick.scrolled, Some(400));
    assert!(tick.rendered);
    assert_eq!(d.host().log.passes(), passes + 1);
    assert_eq!(d.host().frames.frames(), 1);

    assert_eq!(d.tick(32), Tick::default());
}

#[test]
fn driver_smooth_scroll_settles_on_target() {
    let mut d = driver(10_000, 20);
    d.resize(200);

    let request = ScrollToOptions::for_index(5000)
        .with_debounce(false)
        .smooth();
    assert!(d.scroll_to(&request));
    d.settle(0, 16, 100);

    assert!(!d.is_busy());
    assert_eq!(d.list().scroll_offset(), 100_000);
    assert!(d.host().log.passes() > 2);
    let (_, window) = last_window(&d).unwrap();
    assert!(window.contains(5000));
}

#[test]
fn driver_settle_returns_time_of_last_tick() {
    let mut d = driver(10_000, 20);
    d.resize(200);

    d.scroll_to(&ScrollToOptions::for_index(5000).smooth());
    assert_eq!(d.settle(0, 16, 3), 32);
    assert!(d.is_busy());

    assert_eq!(d.settle(1000, 16, 0), 1000);
    // The animation finished during the idle gap, so one tick delivers the final offset.
    assert_eq!(d.settle(1000, 16, 100), 1000);
    assert!(!d.is_busy());
    assert_eq!(d.list().scroll_offset(), 99_820);
}

#[test]
fn driver_bottom_position_is_clamped_by_surface() {
    let mut d = driver(1000, 20);
    d.resize(200);
    d.scroll_to(&ScrollToOptions::for_position(ScrollPosition::Bottom));
    d.tick(0);
    assert_eq!(d.list().scroll_offset(), 19_800);
    let (_, window) = last_window(&d).unwrap();
    assert_eq!(window.end_index, 999);
}

#[test]
fn driver_applies_default_scroll_key_on_first_resize() {
    let mut d = Driver::new(
        VirtualListOptions::new(messages(1000), 20).with_default_scroll_key(Some(300)),
        SimHost::default(),
    );
    assert!(d.host().log.last().is_some_and(|s| s.content == RenderedContent::Unprepared));

    d.resize(200);
    d.settle(0, 16, 10);
    assert_eq!(d.list().scroll_offset(), 300 * 20 + 20 - 200);
}

#[test]
fn driver_with_interval_frames_renders_at_most_once_per_interval() {
    let mut d = Driver::new(
        VirtualListOptions::new(messages(1000), 20),
        SimHost::new(SimulatedSurface::default(), FrameQueue::with_min_interval(32))
            .with_log(RenderLog::with_history()),
    );
    d.resize(200);

    let mut frames = 0;
    for step in 0..8u64 {
        d.user_scroll(100 + step * 50);
        if d.tick(step * 16).frame {
            frames += 1;
        }
    }
    assert_eq!(frames, 4);
    assert_eq!(d.host().log.history().len() as u64, d.host().log.passes());
}

#[test]
fn empty_list_renders_placeholder_through_driver() {
    let mut d = driver(0, 20);
    d.resize(100);
    let snapshot = d.host().log.last().unwrap();
    assert_eq!(snapshot.content, RenderedContent::Empty);
    assert_eq!(snapshot.content_height, 0);
}
