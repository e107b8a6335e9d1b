use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tagsphere::Point;

/// Only samples this recent count towards the release velocity
const WINDOW: Duration = Duration::from_millis(100);

/// Estimates pointer velocity from recent drag samples, standing in for
/// the release velocity a touch gesture recognizer would report.
#[derive(Debug, Default)]
pub struct VelocityTracker {
    samples: VecDeque<(Instant, Point)>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }

    pub fn push(&mut self, time: Instant, point: Point) {
        self.samples.push_back((time, point));
        self.prune(time);
    }

    /// Velocity in units per second over the recent window. Zero when the
    /// pointer has rested for longer than the window.
    pub fn velocity(&mut self, now: Instant) -> Point {
        self.prune(now);
        let (Some(&(t0, p0)), Some(&(t1, p1))) = (self.samples.front(), self.samples.back())
        else {
            return Point::default();
        };
        let dt = t1.duration_since(t0).as_secs_f64();
        if dt <= 0.0 {
            return Point::default();
        }
        Point::new((p1.x - p0.x) / dt, (p1.y - p0.y) / dt)
    }

    fn prune(&mut self, now: Instant) {
        while let Some(&(time, _)) = self.samples.front() {
            if now.saturating_duration_since(time) > WINDOW {
                self.samples.pop_front();
            } else {
                break;
            }
        }
    }
}
