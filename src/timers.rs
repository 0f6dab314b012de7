//! Cancellable presentation timers
//!
//! Delayed host-side actions (the death sting, revealing the game-over screen)
//! are scheduled here rather than fired from the simulation. Restarting cancels
//! everything still pending so nothing leaks into the next run.

/// Handle returned by [`Timers::schedule`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(u32);

#[derive(Debug, Clone)]
struct Pending<A> {
    id: TimerId,
    remaining: f32,
    action: A,
}

/// Timer queue carrying actions of type `A`
#[derive(Debug, Clone)]
pub struct Timers<A> {
    pending: Vec<Pending<A>>,
    next_id: u32,
}

impl<A> Default for Timers<A> {
    fn default() -> Self {
        Self {
            pending: Vec::new(),
            next_id: 1,
        }
    }
}

impl<A> Timers<A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire `action` after `delay` seconds
    pub fn schedule(&mut self, delay: f32, action: A) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            id,
            remaining: delay.max(0.0),
            action,
        });
        id
    }

    /// Returns true if the timer was still pending
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.id != id);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Advance by `dt` seconds and return the actions that came due, in
    /// scheduling order
    pub fn advance(&mut self, dt: f32) -> Vec<A> {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        for p in &mut self.pending {
            p.remaining -= dt;
        }

        let mut fired = Vec::new();
        let mut i = 0;
        while i < self.pending.len() {
            if self.pending[i].remaining <= 0.0 {
                fired.push(self.pending.remove(i).action);
            } else {
                i += 1;
            }
        }
        fired
    }
}
