//! End-to-end loop scenarios on a virtual clock.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use slidekit_core::position::{RecordingSink, Transition};
use slidekit_core::{CarouselConfig, SlideBy};
use slidekit_runtime::{Carousel, PaintEvent, VirtualScheduler};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

type TestCarousel = Carousel<u32, RecordingSink, VirtualScheduler>;

fn build(config: CarouselConfig, slide_count: u32) -> TestCarousel {
    Carousel::new(
        config,
        (1..=slide_count).collect(),
        RecordingSink::new(),
        VirtualScheduler::new(),
    )
    .unwrap()
}

/// Advance the virtual clock and feed fired timers back into the carousel.
fn run_for(carousel: &mut TestCarousel, dt: Duration) {
    let msgs = carousel.scheduler_mut().advance(dt);
    for msg in msgs {
        carousel.handle_timer(msg);
    }
}

fn record_pages(carousel: &mut TestCarousel) -> Rc<RefCell<Vec<PaintEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    carousel.on_paint(move |e| sink.borrow_mut().push(e));
    events
}

#[test]
fn six_slide_full_cycle() {
    // 6 slides, 1 visible, slide_by 1, looping, speed 300ms:
    // clone_count = min(1 + 1, 6) = 2, track length 10, initial index 2.
    let mut carousel = build(CarouselConfig::new(), 6);
    assert_eq!(carousel.slides().clone_count(), 2);
    assert_eq!(carousel.slides().render_len(), 10);
    assert_eq!(carousel.current_index(), 2);

    let events = record_pages(&mut carousel);

    // One full cycle: ceil(6 / 1) moves, each followed by its correction.
    for _ in 0..6 {
        carousel.next();
        run_for(&mut carousel, ms(300));
        assert!(!carousel.is_animating());
    }

    assert_eq!(carousel.current_index(), 2);

    let animated_pages: Vec<usize> = events
        .borrow()
        .iter()
        .filter(|e| e.animated)
        .map(|e| e.active_page)
        .collect();
    assert_eq!(animated_pages, vec![1, 2, 3, 4, 5, 0]);
}

#[test]
fn backward_cycle_wraps_the_other_way() {
    let mut carousel = build(CarouselConfig::new(), 6);
    let events = record_pages(&mut carousel);

    for _ in 0..6 {
        carousel.prev();
        run_for(&mut carousel, ms(300));
    }

    assert_eq!(carousel.current_index(), 2);
    let animated_pages: Vec<usize> = events
        .borrow()
        .iter()
        .filter(|e| e.animated)
        .map(|e| e.active_page)
        .collect();
    assert_eq!(animated_pages, vec![5, 4, 3, 2, 1, 0]);
}

#[test]
fn small_set_is_inert() {
    // 3 slides, 5 visible: clone_count 0, no looping possible, every move
    // clamps to index 0.
    let mut carousel = build(CarouselConfig::new().items(5), 3);
    assert_eq!(carousel.slides().clone_count(), 0);
    assert_eq!(carousel.slides().render_len(), 3);
    assert_eq!(carousel.page_count(), 1);

    for _ in 0..4 {
        carousel.next();
        run_for(&mut carousel, ms(300));
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.active_page(), 0);
    }
}

#[test]
fn double_move_within_speed_changes_index_once() {
    let mut carousel = build(CarouselConfig::new(), 6);

    carousel.next();
    run_for(&mut carousel, ms(150));
    carousel.next(); // still animating: dropped
    assert_eq!(carousel.current_index(), 3);

    run_for(&mut carousel, ms(150));
    carousel.next(); // lock released: accepted
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn page_step_moves_a_full_window() {
    let mut carousel = build(
        CarouselConfig::new().items(2).slide_by(SlideBy::Page),
        6,
    );
    // clone_count = min(2 + 2, 6) = 4, initial index 4.
    assert_eq!(carousel.slides().clone_count(), 4);
    assert_eq!(carousel.current_index(), 4);

    carousel.next();
    assert_eq!(carousel.current_index(), 6);
    run_for(&mut carousel, ms(300));
    assert_eq!(carousel.active_page(), 1);
}

#[test]
fn non_looping_track_stops_at_the_ends() {
    let mut carousel = build(CarouselConfig::new().looping(false).items(2), 5);
    assert_eq!(carousel.slides().render_len(), 5);
    assert_eq!(carousel.current_index(), 0);

    for _ in 0..10 {
        carousel.next();
        run_for(&mut carousel, ms(300));
    }
    assert_eq!(carousel.current_index(), 3);

    for _ in 0..10 {
        carousel.prev();
        run_for(&mut carousel, ms(300));
    }
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn autoplay_cycles_and_hover_pauses() {
    let mut carousel = build(
        CarouselConfig::new()
            .autoplay(true)
            .autoplay_interval(ms(1000)),
        6,
    );
    assert!(carousel.autoplay_running());

    run_for(&mut carousel, ms(1000)); // tick -> move to 3
    run_for(&mut carousel, ms(300)); // correction window
    assert_eq!(carousel.current_index(), 3);

    carousel.notify_hover_start();
    assert!(!carousel.autoplay_running());
    run_for(&mut carousel, ms(5000));
    assert_eq!(carousel.current_index(), 3, "paused autoplay kept moving");

    carousel.notify_hover_end();
    run_for(&mut carousel, ms(1000));
    run_for(&mut carousel, ms(300));
    assert_eq!(carousel.current_index(), 4);
}

#[test]
fn seek_from_indicator_bypasses_animation() {
    let mut carousel = build(CarouselConfig::new(), 6);
    let events = record_pages(&mut carousel);

    carousel.seek_to_page(3);
    assert_eq!(carousel.current_index(), 5);
    assert!(!carousel.is_animating());

    let last = carousel.sink().last().copied().unwrap();
    assert_eq!(last.transition, Transition::None);
    assert_eq!(last.offset_percent, -500.0);

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0],
        PaintEvent {
            active_page: 3,
            animated: false
        }
    );
}

#[test]
fn offsets_follow_the_render_track() {
    let mut carousel = build(CarouselConfig::new(), 6);

    carousel.next();
    let animated = carousel.sink().last().copied().unwrap();
    assert_eq!(animated.offset_percent, -300.0);
    assert_eq!(animated.transition, Transition::Animate(ms(300)));

    run_for(&mut carousel, ms(300));
    // Canonical landing: no correction repaint.
    assert_eq!(carousel.sink().frames.len(), 2);
}
