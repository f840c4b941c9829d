//! Clock-free state for the throttle and debounce helpers.
//!
//! The browser crate owns the timers; these types only decide whether a
//! call goes through, so the policies can be checked without a clock.

/// Leading-edge throttle gate.
///
/// The first call passes and closes the gate. Calls made while it is closed
/// are dropped, not queued. A timer reopens it after the interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThrottleGate {
    cooling: bool,
}

impl ThrottleGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if the call should run; the caller then arms the reopen timer.
    pub fn try_pass(&mut self) -> bool {
        if self.cooling {
            false
        } else {
            self.cooling = true;
            true
        }
    }

    pub fn reopen(&mut self) {
        self.cooling = false;
    }

    pub fn is_open(&self) -> bool {
        !self.cooling
    }
}

/// Debounce bookkeeping for one wrapped function.
///
/// Every call restarts the quiet-period timer. Trailing mode runs the last
/// call's arguments when the timer elapses; leading (`immediate`) mode runs
/// the first call of a burst and suppresses the trailing one.
#[derive(Debug, Clone)]
pub struct DebounceState<A> {
    immediate: bool,
    armed: bool,
    latest: Option<A>,
}

impl<A> DebounceState<A> {
    pub fn new(immediate: bool) -> Self {
        Self {
            immediate,
            armed: false,
            latest: None,
        }
    }

    /// Register a call. Returns arguments to run right now, if any.
    /// The caller must (re)start the quiet-period timer afterwards.
    pub fn call(&mut self, args: A) -> Option<A> {
        let call_now = self.immediate && !self.armed;
        self.armed = true;
        if self.immediate {
            call_now.then_some(args)
        } else {
            self.latest = Some(args);
            None
        }
    }

    /// The quiet period ended. Returns the trailing call, if any.
    pub fn elapse(&mut self) -> Option<A> {
        self.armed = false;
        if self.immediate {
            None
        } else {
            self.latest.take()
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throttle_passes_once_per_interval() {
        let mut gate = ThrottleGate::new();
        let passed = (0..10).filter(|_| gate.try_pass()).count();
        assert_eq!(passed, 1);
        assert!(!gate.is_open());

        gate.reopen();
        assert!(gate.try_pass());
        assert!(!gate.try_pass());
    }

    #[test]
    fn test_trailing_debounce_runs_last_call_once() {
        let mut state = DebounceState::new(false);
        for i in 0..5 {
            assert_eq!(state.call(i), None);
        }
        assert!(state.is_armed());
        assert_eq!(state.elapse(), Some(4));
        assert_eq!(state.elapse(), None);
        assert!(!state.is_armed());
    }

    #[test]
    fn test_immediate_debounce_runs_first_call_only() {
        let mut state = DebounceState::new(true);
        assert_eq!(state.call("a"), Some("a"));
        assert_eq!(state.call("b"), None);
        assert_eq!(state.call("c"), None);
        assert_eq!(state.elapse(), None);

        // A new burst fires on its leading edge again.
        assert_eq!(state.call("d"), Some("d"));
    }
}
