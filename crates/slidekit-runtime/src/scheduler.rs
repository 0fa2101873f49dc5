#![forbid(unsafe_code)]

//! Injected timer capability.
//!
//! The engine never reads a wall clock. Everything time-driven — the
//! post-transition wrap correction and the autoplay interval — is armed
//! through a [`Scheduler`] and comes back to the host as a [`TimerMsg`],
//! which the host feeds into `Carousel::handle_timer`. Two implementations:
//!
//! - [`VirtualScheduler`]: deterministic, advanced manually. Used by tests
//!   and by hosts that already own a frame clock.
//! - [`ThreadScheduler`]: background-thread timers delivering messages over
//!   an `mpsc` channel, each stoppable through a condvar-backed stop signal.

use std::sync::mpsc;
use std::sync::{Arc, Condvar, Mutex};
use std::thread;
use std::time::Duration;

use web_time::Instant;

/// Message delivered when a timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMsg {
    /// An animated move's duration elapsed; run the wrap correction.
    CorrectionElapsed,
    /// The autoplay interval elapsed; advance by the configured step.
    AutoplayTick,
}

/// Identifier for an armed timer.
pub type TimerId = u64;

/// Timer capability injected into the carousel.
///
/// Cancelling an unknown or already-fired id is a no-op; the correction
/// timer in particular must fire exactly once per accepted move and is never
/// cancelled by the engine.
pub trait Scheduler {
    /// Arm a one-shot timer firing `msg` after `delay`.
    fn schedule_once(&mut self, delay: Duration, msg: TimerMsg) -> TimerId;

    /// Arm a repeating timer firing `msg` every `interval`.
    fn schedule_every(&mut self, interval: Duration, msg: TimerMsg) -> TimerId;

    /// Cancel a timer.
    fn cancel(&mut self, id: TimerId);
}

// ---------------------------------------------------------------------------
// Virtual scheduler
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy)]
struct VirtualTimer {
    id: TimerId,
    due: Duration,
    /// Re-arm period for repeating timers.
    interval: Option<Duration>,
    msg: TimerMsg,
}

/// Deterministic scheduler driven by [`VirtualScheduler::advance`].
///
/// Time starts at zero and only moves when advanced. Due timers fire in
/// deadline order (arm order breaks ties); repeating timers re-arm from
/// their previous deadline, not from the advance target, so long advances
/// fire every missed tick.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: TimerId,
    timers: Vec<VirtualTimer>,
}

impl VirtualScheduler {
    /// Scheduler at time zero with no timers armed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Advance virtual time by `dt`, collecting every message whose deadline
    /// falls within the window, in firing order.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimerMsg> {
        let target = self.now + dt;
        let mut fired = Vec::new();
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= target)
                .min_by_key(|(_, t)| (t.due, t.id))
                .map(|(pos, _)| pos);
            let Some(pos) = next else { break };

            let timer = self.timers[pos];
            self.now = timer.due;
            fired.push(timer.msg);
            match timer.interval {
                Some(interval) => self.timers[pos].due = timer.due + interval,
                None => {
                    self.timers.remove(pos);
                }
            }
        }
        self.now = target;
        fired
    }

    fn arm(&mut self, due: Duration, interval: Option<Duration>, msg: TimerMsg) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(VirtualTimer {
            id,
            due,
            interval,
            msg,
        });
        id
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule_once(&mut self, delay: Duration, msg: TimerMsg) -> TimerId {
        self.arm(self.now + delay, None, msg)
    }

    fn schedule_every(&mut self, interval: Duration, msg: TimerMsg) -> TimerId {
        // Zero intervals would never make progress in advance().
        let interval = interval.max(Duration::from_nanos(1));
        self.arm(self.now + interval, Some(interval), msg)
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.retain(|t| t.id != id);
    }
}

// ---------------------------------------------------------------------------
// Thread scheduler
// ---------------------------------------------------------------------------

/// Signal a timer thread checks to know when to stop.
#[derive(Clone)]
pub struct StopSignal {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopSignal {
    fn new() -> (Self, StopTrigger) {
        let inner = Arc::new((Mutex::new(false), Condvar::new()));
        let signal = Self {
            inner: inner.clone(),
        };
        let trigger = StopTrigger { inner };
        (signal, trigger)
    }

    /// Whether the stop signal has been triggered.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        let (lock, _) = &*self.inner;
        *lock.lock().unwrap()
    }

    /// Wait for either the stop signal or a timeout.
    ///
    /// Returns `true` if stopped, `false` if the timeout elapsed. Blocks
    /// efficiently on a condition variable.
    pub fn wait_timeout(&self, duration: Duration) -> bool {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        if *stopped {
            return true;
        }
        let result = cvar.wait_timeout(stopped, duration).unwrap();
        stopped = result.0;
        *stopped
    }
}

/// Runtime-side handle that trips a [`StopSignal`].
struct StopTrigger {
    inner: Arc<(Mutex<bool>, Condvar)>,
}

impl StopTrigger {
    fn stop(&self) {
        let (lock, cvar) = &*self.inner;
        let mut stopped = lock.lock().unwrap();
        *stopped = true;
        cvar.notify_all();
    }
}

struct RunningTimer {
    id: TimerId,
    trigger: StopTrigger,
    thread: Option<thread::JoinHandle<()>>,
}

impl RunningTimer {
    fn stop(mut self) {
        self.trigger.stop();
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }

    fn is_finished(&self) -> bool {
        self.thread.as_ref().is_none_or(|h| h.is_finished())
    }
}

impl Drop for RunningTimer {
    fn drop(&mut self) {
        self.trigger.stop();
        // Don't join in drop to avoid blocking.
    }
}

/// Thread-backed scheduler for hosts without their own clock.
///
/// Each armed timer runs on a background thread and sends its [`TimerMsg`]
/// through the channel returned by [`ThreadScheduler::new`]. The host loop
/// receives and feeds messages into the carousel, which keeps all engine
/// state on one thread.
pub struct ThreadScheduler {
    sender: mpsc::Sender<TimerMsg>,
    next_id: TimerId,
    running: Vec<RunningTimer>,
}

impl ThreadScheduler {
    /// Create a scheduler and the receiving end of its timer channel.
    #[must_use]
    pub fn new() -> (Self, mpsc::Receiver<TimerMsg>) {
        let (sender, receiver) = mpsc::channel();
        (
            Self {
                sender,
                next_id: 0,
                running: Vec::new(),
            },
            receiver,
        )
    }

    fn spawn(&mut self, run: impl FnOnce(mpsc::Sender<TimerMsg>, StopSignal) + Send + 'static) -> TimerId {
        // Reap threads that already delivered their message.
        self.running.retain(|t| !t.is_finished());

        let id = self.next_id;
        self.next_id += 1;
        let (signal, trigger) = StopSignal::new();
        let sender = self.sender.clone();
        let thread = thread::spawn(move || run(sender, signal));
        self.running.push(RunningTimer {
            id,
            trigger,
            thread: Some(thread),
        });
        id
    }

    /// Stop every armed timer and join its thread.
    pub fn stop_all(&mut self) {
        for timer in self.running.drain(..) {
            timer.stop();
        }
    }
}

impl Scheduler for ThreadScheduler {
    fn schedule_once(&mut self, delay: Duration, msg: TimerMsg) -> TimerId {
        let id = self.spawn(move |sender, stop| {
            if !stop.wait_timeout(delay) {
                let _ = sender.send(msg);
            }
        });
        tracing::debug!(timer_id = id, ?delay, ?msg, "one-shot timer armed");
        id
    }

    fn schedule_every(&mut self, interval: Duration, msg: TimerMsg) -> TimerId {
        let id = self.spawn(move |sender, stop| {
            // Re-arm from the deadline, not from the wakeup, so intervals
            // don't drift by the delivery latency.
            let mut deadline = Instant::now() + interval;
            loop {
                let wait = deadline.saturating_duration_since(Instant::now());
                if stop.wait_timeout(wait) {
                    break;
                }
                if sender.send(msg).is_err() {
                    break;
                }
                deadline += interval;
            }
        });
        tracing::debug!(timer_id = id, ?interval, ?msg, "repeating timer armed");
        id
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(pos) = self.running.iter().position(|t| t.id == id) {
            tracing::debug!(timer_id = id, "timer cancelled");
            self.running.remove(pos).stop();
        }
    }
}

impl Drop for ThreadScheduler {
    fn drop(&mut self) {
        self.stop_all();
    }
}
