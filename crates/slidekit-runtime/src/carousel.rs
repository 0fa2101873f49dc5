#![forbid(unsafe_code)]

//! The carousel control surface.
//!
//! [`Carousel`] wires the pieces together: it owns the slide set, the index
//! controller, the position renderer, the injected scheduler, and the paint
//! subscribers. Hosts call the control methods (`move_by`, `seek_to_page`,
//! autoplay start/stop, hover notifications) and feed timer messages back in
//! through [`Carousel::handle_timer`]:
//!
//! ```ignore
//! let (scheduler, timers) = ThreadScheduler::new();
//! let mut carousel = Carousel::new(config, panels, sink, scheduler)?;
//! carousel.on_paint(|event| dots.highlight(event.active_page));
//! while let Ok(msg) = timers.recv() {
//!     carousel.handle_timer(msg);
//! }
//! ```

use slidekit_core::config::{CarouselConfig, ConfigError};
use slidekit_core::position::{PositionRenderer, TrackSink};
use slidekit_core::{geometry, SlideSet};

use crate::controller::IndexController;
use crate::scheduler::{Scheduler, TimerId, TimerMsg};

/// One paint notification for indicator widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintEvent {
    /// Page to highlight.
    pub active_page: usize,
    /// Whether this paint is a user-visible animated transition. Instant
    /// paints (corrections, seeks) repeat the page unchanged so indicators
    /// never flicker during the invisible teleport.
    pub animated: bool,
}

/// A carousel instance: panels, index state, rendering, and timers.
pub struct Carousel<T, K, S> {
    config: CarouselConfig,
    slides: SlideSet<T>,
    controller: IndexController,
    renderer: PositionRenderer<K>,
    scheduler: S,
    subscribers: Vec<Box<dyn FnMut(PaintEvent)>>,
    autoplay_timer: Option<TimerId>,
    last_page: usize,
}

impl<T: Clone, K: TrackSink, S: Scheduler> Carousel<T, K, S> {
    /// Validate the config, build the render track, seed the index, and
    /// paint the initial position instantly.
    ///
    /// Autoplay starts immediately when configured; with an empty or
    /// too-small panel set it ticks harmlessly against a pinned index.
    pub fn new(
        config: CarouselConfig,
        panels: Vec<T>,
        sink: K,
        scheduler: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let clone_count = if config.is_looping() {
            geometry::clone_count(
                panels.len(),
                config.visible_items(),
                config.effective_slide_by(),
            )
        } else {
            0
        };
        let slides = SlideSet::new(panels, config.is_looping(), clone_count);
        let controller = IndexController::new(&config, slides.slide_count(), slides.clone_count());
        let mut renderer = PositionRenderer::new(
            sink,
            config.visible_items(),
            config.transition_speed(),
        );
        renderer.paint(controller.current_index(), true);
        let last_page = controller.active_page();

        let mut carousel = Self {
            config,
            slides,
            controller,
            renderer,
            scheduler,
            subscribers: Vec::new(),
            autoplay_timer: None,
            last_page,
        };
        if carousel.config.autoplay_enabled() {
            carousel.start_autoplay();
        }
        Ok(carousel)
    }

    /// Subscribe to paint notifications.
    pub fn on_paint(&mut self, callback: impl FnMut(PaintEvent) + 'static) {
        self.subscribers.push(Box::new(callback));
    }

    /// Request an animated move by `step` slides. Dropped silently when a
    /// transition is in flight.
    pub fn move_by(&mut self, step: i64) {
        let Some(mv) = self.controller.request_move(step) else {
            return;
        };
        // Paint synchronously before the correction timer starts.
        self.paint(false);
        self.scheduler
            .schedule_once(mv.correction_delay, TimerMsg::CorrectionElapsed);
    }

    /// Move forward by the configured step.
    pub fn next(&mut self) {
        self.move_by(self.config.effective_slide_by() as i64);
    }

    /// Move backward by the configured step.
    pub fn prev(&mut self) {
        self.move_by(-(self.config.effective_slide_by() as i64));
    }

    /// Jump straight to a page, instantly and without touching the lock.
    pub fn seek_to_page(&mut self, page: usize) {
        self.controller.seek_to_page(page);
        self.last_page = self.controller.active_page();
        self.paint(true);
    }

    /// Deliver a fired timer.
    pub fn handle_timer(&mut self, msg: TimerMsg) {
        match msg {
            TimerMsg::CorrectionElapsed => {
                if self.controller.finish_move().is_some() {
                    self.paint(true);
                }
            }
            TimerMsg::AutoplayTick => {
                self.move_by(self.config.effective_slide_by() as i64);
            }
        }
    }

    /// Start the autoplay interval. No-op when already running.
    pub fn start_autoplay(&mut self) {
        if self.autoplay_timer.is_some() {
            return;
        }
        tracing::debug!(interval = ?self.config.autoplay_tick(), "autoplay started");
        self.autoplay_timer = Some(
            self.scheduler
                .schedule_every(self.config.autoplay_tick(), TimerMsg::AutoplayTick),
        );
    }

    /// Stop the autoplay interval. No-op when already stopped. An in-flight
    /// move and its correction are left untouched.
    pub fn stop_autoplay(&mut self) {
        if let Some(id) = self.autoplay_timer.take() {
            self.scheduler.cancel(id);
            tracing::debug!("autoplay stopped");
        }
    }

    /// Pointer entered the carousel: pause autoplay when configured to.
    pub fn notify_hover_start(&mut self) {
        if self.config.autoplay_enabled() && self.config.hover_pauses_autoplay() {
            self.stop_autoplay();
        }
    }

    /// Pointer left the carousel: resume autoplay when configured to.
    pub fn notify_hover_end(&mut self) {
        if self.config.autoplay_enabled() && self.config.hover_pauses_autoplay() {
            self.start_autoplay();
        }
    }

    /// Whether the autoplay interval is armed.
    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay_timer.is_some()
    }

    /// Current left-edge index on the render track.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.controller.current_index()
    }

    /// Page currently highlighted by indicators.
    #[must_use]
    pub fn active_page(&self) -> usize {
        self.last_page
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    /// Number of indicator pages.
    #[must_use]
    pub fn page_count(&self) -> usize {
        geometry::page_count(self.slides.slide_count(), self.config.visible_items())
    }

    /// The slide set backing this carousel.
    #[must_use]
    pub fn slides(&self) -> &SlideSet<T> {
        &self.slides
    }

    /// The configuration this carousel was built with.
    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Borrow the rendering sink.
    #[must_use]
    pub fn sink(&self) -> &K {
        self.renderer.sink()
    }

    /// Mutably borrow the scheduler (hosts driving a virtual clock).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Paint the current index and notify subscribers. The active page is
    /// recomputed only for animated paints; instant paints repeat the last
    /// page.
    fn paint(&mut self, instant: bool) {
        if !instant {
            self.last_page = self.controller.active_page();
        }
        self.renderer.paint(self.controller.current_index(), instant);
        let event = PaintEvent {
            active_page: self.last_page,
            animated: !instant,
        };
        for callback in &mut self.subscribers {
            callback(event);
        }
    }
}
