//! Timers that cannot outlive their owner.
//!
//! Every handle carries a `CancelToken`. Dropping the handle cancels the timer
//! and flips the token, so async work that captured a clone of the token can
//! tell it must not touch component state any more.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use gloo_timers::future::TimeoutFuture;

#[derive(Clone, Default, Debug)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

impl PartialEq for CancelToken {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

pub struct ScopedInterval {
    _interval: Interval,
    token: CancelToken,
}

impl ScopedInterval {
    pub fn new<F>(millis: u32, mut tick: F) -> Self
    where
        F: FnMut() + 'static,
    {
        let token = CancelToken::new();
        let guard = token.clone();
        let interval = Interval::new(millis, move || {
            if !guard.is_cancelled() {
                tick();
            }
        });
        Self {
            _interval: interval,
            token,
        }
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }
}

impl Drop for ScopedInterval {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

pub struct ScopedTimeout {
    _timeout: Timeout,
    token: CancelToken,
}

impl ScopedTimeout {
    pub fn new<F>(millis: u32, fire: F) -> Self
    where
        F: FnOnce() + 'static,
    {
        let token = CancelToken::new();
        let guard = token.clone();
        let timeout = Timeout::new(millis, move || {
            if !guard.is_cancelled() {
                fire();
            }
        });
        Self {
            _timeout: timeout,
            token,
        }
    }
}

impl Drop for ScopedTimeout {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

/// Waits `millis`, then reports whether the caller may still proceed.
pub async fn sleep(millis: u32, token: &CancelToken) -> bool {
    TimeoutFuture::new(millis).await;
    !token.is_cancelled()
}
