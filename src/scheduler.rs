/// Cooperative frame scheduler.
///
/// Stands in for the display's animation-frame callback: the host loop asks
/// `poll` whether a frame is due and runs at most one tick per call.  Each
/// registration gets a fresh token; once deregistered (pause, game over,
/// restart, teardown) that token never fires again, so a stale frame cannot
/// run against a reset session.

use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameToken(u64);

#[derive(Clone, Copy, Debug)]
struct Slot {
    token: FrameToken,
    due: Instant,
}

#[derive(Debug)]
pub struct FrameScheduler {
    interval: Duration,
    next_id: u64,
    slot: Option<Slot>,
}

impl FrameScheduler {
    pub fn new(interval: Duration) -> Self {
        FrameScheduler {
            interval,
            next_id: 0,
            slot: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arm the scheduler.  Any previous registration is dropped first.
    pub fn register(&mut self, now: Instant) -> FrameToken {
        self.next_id += 1;
        let token = FrameToken(self.next_id);
        self.slot = Some(Slot {
            token,
            due: now + self.interval,
        });
        token
    }

    pub fn deregister(&mut self) -> Option<FrameToken> {
        self.slot.take().map(|s| s.token)
    }

    pub fn is_registered(&self) -> bool {
        self.slot.is_some()
    }

    pub fn is_live(&self, token: FrameToken) -> bool {
        self.slot.map_or(false, |s| s.token == token)
    }

    /// Returns the live token if a frame is due, and re-arms for the next
    /// interval.  After a long stall the schedule restarts from `now`
    /// instead of firing a burst of catch-up frames.
    pub fn poll(&mut self, now: Instant) -> Option<FrameToken> {
        let slot = self.slot.as_mut()?;
        if now < slot.due {
            return None;
        }
        let next_due = slot.due + self.interval;
        slot.due = if next_due <= now { now + self.interval } else { next_due };
        Some(slot.token)
    }

    /// How long the host may sleep before the next frame, if one is armed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.slot.map(|s| s.due.saturating_duration_since(now))
    }
}
