//! Per-record view deduplication.
//!
//! Best-effort, process-local: suppresses rapid repeated view recordings
//! for the same record id. Scope is a single process instance and state
//! resets on restart; duplicates across instances are accepted.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Minimum spacing between counted views of the same record.
pub const VIEW_COOLDOWN: Duration = Duration::from_secs(2);

/// Default bound on tracked record ids before the oldest entries are swept.
pub const DEFAULT_COOLDOWN_CAPACITY: usize = 4096;

/// Bounded map of record id to last counted view time.
pub struct ViewCooldown {
    window: Duration,
    capacity: usize,
    last_view: Mutex<HashMap<String, Instant>>,
}

impl ViewCooldown {
    pub fn new(window: Duration, capacity: usize) -> Self {
        Self {
            window,
            capacity: capacity.max(1),
            last_view: Mutex::new(HashMap::new()),
        }
    }

    /// Whether a view of `id` at `now` should be counted. Marks the id as
    /// seen when it returns `true`.
    pub fn check_and_mark(&self, id: &str, now: Instant) -> bool {
        let mut map = self.last_view.lock().unwrap_or_else(|e| e.into_inner());

        if let Some(last) = map.get(id) {
            if now.duration_since(*last) < self.window {
                return false;
            }
        }

        if map.len() >= self.capacity && !map.contains_key(id) {
            self.sweep(&mut map, now);
        }

        map.insert(id.to_string(), now);
        true
    }

    /// Drop expired entries; if nothing expired, drop the oldest one so the
    /// map never grows past `capacity`.
    fn sweep(&self, map: &mut HashMap<String, Instant>, now: Instant) {
        map.retain(|_, last| now.duration_since(*last) < self.window);

        if map.len() >= self.capacity {
            if let Some(oldest) = map
                .iter()
                .min_by_key(|(_, last)| **last)
                .map(|(id, _)| id.clone())
            {
                map.remove(&oldest);
            }
        }
    }
}

impl Default for ViewCooldown {
    fn default() -> Self {
        Self::new(VIEW_COOLDOWN, DEFAULT_COOLDOWN_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rapid_repeat_view_is_suppressed() {
        let cooldown = ViewCooldown::new(Duration::from_secs(2), 16);
        let t0 = Instant::now();

        assert!(cooldown.check_and_mark("p1", t0));
        assert!(!cooldown.check_and_mark("p1", t0 + Duration::from_millis(500)));
    }

    #[test]
    fn view_after_window_is_counted_again() {
        let cooldown = ViewCooldown::new(Duration::from_secs(2), 16);
        let t0 = Instant::now();

        assert!(cooldown.check_and_mark("p1", t0));
        assert!(cooldown.check_and_mark("p1", t0 + Duration::from_secs(3)));
    }

    #[test]
    fn distinct_ids_do_not_interfere() {
        let cooldown = ViewCooldown::new(Duration::from_secs(2), 16);
        let t0 = Instant::now();

        assert!(cooldown.check_and_mark("p1", t0));
        assert!(cooldown.check_and_mark("p2", t0));
    }

    #[test]
    fn capacity_is_bounded_by_sweeping() {
        let cooldown = ViewCooldown::new(Duration::from_secs(2), 2);
        let t0 = Instant::now();

        assert!(cooldown.check_and_mark("a", t0));
        assert!(cooldown.check_and_mark("b", t0 + Duration::from_millis(1)));
        // Third distinct id forces an eviction rather than unbounded growth.
        assert!(cooldown.check_and_mark("c", t0 + Duration::from_millis(2)));

        let len = cooldown
            .last_view
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len();
        assert!(len <= 2);
    }
}
