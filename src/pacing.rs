//! Frame-rate throttle and FPS reporting for the event loop.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

/// Fixed-interval frame scheduler
///
/// The event loop sleeps until `next_frame()`, then draws once if `is_due`.
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame_interval: Duration,
    next_frame: Instant,
}

impl FramePacer {
    /// Pacer whose first frame is due immediately
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            next_frame: now,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        self.frame_interval
    }

    pub fn next_frame(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Schedule the frame after one drawn at `now`
    ///
    /// A late frame does not cause a burst of catch-up frames; the schedule
    /// restarts from `now`.
    pub fn advance(&mut self, now: Instant) {
        self.next_frame += self.frame_interval;
        if self.next_frame <= now {
            self.next_frame = now + self.frame_interval;
        }
    }
}

/// Rolling average of the last 60 frame times, logged once per second
pub struct FpsTracker {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    last_report: Instant,
}

impl FpsTracker {
    pub fn new(now: Instant) -> Self {
        Self {
            frame_times: VecDeque::new(),
            last_frame: now,
            last_report: now,
        }
    }

    pub fn record_frame(&mut self, now: Instant) {
        let frame_time = now - self.last_frame;
        self.last_frame = now;

        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > 60 {
            self.frame_times.pop_front();
        }

        if now - self.last_report > Duration::from_secs(1) {
            debug!("FPS: {:.1}", self.current_fps());
            self.last_report = now;
        }
    }

    pub fn current_fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f32() / self.frame_times.len() as f32;

        if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        }
    }
}
