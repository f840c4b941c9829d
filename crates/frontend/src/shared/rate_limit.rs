//! Throttle and debounce wrappers for window event handlers.
//!
//! The gating decisions live in `contracts::shared::rate_limit`; this module
//! only owns the timers.

use contracts::shared::rate_limit::{DebounceState, ThrottleGate};
use gloo_timers::callback::Timeout;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Run `f` on the leading edge, then drop every call for `interval_ms`.
///
/// Dropped calls are not replayed, so the last event of a burst may be
/// missed until the next one arrives.
pub fn throttle<A, F>(interval_ms: u32, f: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let gate = Rc::new(Cell::new(ThrottleGate::new()));
    move |args: A| {
        let mut current = gate.get();
        if !current.try_pass() {
            return;
        }
        gate.set(current);
        f(args);

        let gate = Rc::clone(&gate);
        Timeout::new(interval_ms, move || {
            let mut current = gate.get();
            current.reopen();
            gate.set(current);
        })
        .forget();
    }
}

/// Run `f` once `wait_ms` passed without another call.
///
/// With `immediate` the first call of a burst runs right away and the
/// trailing call is suppressed.
pub fn debounce<A, F>(wait_ms: u32, immediate: bool, f: F) -> impl Fn(A)
where
    A: 'static,
    F: Fn(A) + 'static,
{
    let f = Rc::new(f);
    let state = Rc::new(RefCell::new(DebounceState::new(immediate)));
    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

    move |args: A| {
        let call_now = state.borrow_mut().call(args);

        let later = {
            let f = Rc::clone(&f);
            let state = Rc::clone(&state);
            Timeout::new(wait_ms, move || {
                let trailing = state.borrow_mut().elapse();
                if let Some(args) = trailing {
                    (*f)(args);
                }
            })
        };
        // Dropping the previous Timeout clears it.
        pending.borrow_mut().replace(later);

        if let Some(args) = call_now {
            (*f)(args);
        }
    }
}
