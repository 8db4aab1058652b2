/// Handle for one scheduled frame loop. Zero is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken(pub u32);

/// Recurring tick registration with cancellation.
///
/// Every `start()` issues a new token and every `cancel()` invalidates all
/// tokens issued so far, so a callback registered before a pause can never
/// tick the game after it resumes.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    generation: u32,
    active: bool,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new frame loop and return its token.
    pub fn start(&mut self) -> FrameToken {
        self.generation = self.generation.wrapping_add(1).max(1);
        self.active = true;
        FrameToken(self.generation)
    }

    /// Stop the current loop. Outstanding tokens become stale.
    pub fn cancel(&mut self) {
        if self.active {
            self.generation = self.generation.wrapping_add(1).max(1);
            self.active = false;
        }
    }

    /// Whether a callback carrying `token` may run a tick.
    pub fn accepts(&self, token: FrameToken) -> bool {
        self.active && token.0 == self.generation
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Token of the active loop, if any.
    pub fn current(&self) -> Option<FrameToken> {
        self.active.then_some(FrameToken(self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_issues_nonzero_token() {
        let mut sched = FrameScheduler::new();
        assert!(sched.current().is_none());
        let token = sched.start();
        assert_ne!(token.0, 0);
        assert!(sched.accepts(token));
        assert_eq!(sched.current(), Some(token));
    }

    #[test]
    fn cancel_rejects_outstanding_token() {
        let mut sched = FrameScheduler::new();
        let token = sched.start();
        sched.cancel();
        assert!(!sched.accepts(token));
        assert!(!sched.is_active());
    }

    #[test]
    fn restart_does_not_revive_stale_token() {
        let mut sched = FrameScheduler::new();
        let old = sched.start();
        sched.cancel();
        let new = sched.start();
        assert_ne!(old, new);
        assert!(!sched.accepts(old));
        assert!(sched.accepts(new));
    }
}
