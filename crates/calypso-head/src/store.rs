//! Middleware chain and the store that runs it.
//!
//! [`Store::dispatch`] hands every action to each registered [`Middleware`]
//! in order, then applies it to the state. Middleware observes the state as
//! it was *before* the action, receives the action by shared reference, and
//! so always passes it downstream unchanged.
//!
//! | Middleware | Use case |
//! |------------|----------|
//! | [`DocumentTitleMiddleware`](crate::document_title::DocumentTitleMiddleware) | Keep the page title in sync |
//! | [`LoggingMiddleware`] | Structured logging via `tracing` |
//! | [`FnMiddleware`] | Quick closures for simple callbacks |
//! | Custom `impl Middleware` | Anything else |

use tracing::{debug, trace};

use crate::actions::HeadAction;
use crate::state::{HeadState, StateReader};

/// Observer of dispatched actions.
///
/// Runs synchronously inside [`Store::dispatch`]. The default implementation
/// does nothing.
///
/// # Example
///
/// ```ignore
/// struct CountTitles(AtomicUsize);
///
/// impl Middleware for CountTitles {
///     fn on_action(&self, _state: &dyn StateReader, action: &HeadAction) {
///         if let HeadAction::TitleSet { .. } = action {
///             self.0.fetch_add(1, Ordering::Relaxed);
///         }
///     }
/// }
/// ```
pub trait Middleware: Send + Sync {
    fn on_action(&self, state: &dyn StateReader, action: &HeadAction) {
        let _ = (state, action);
    }
}

/// A middleware backed by a closure.
pub struct FnMiddleware<F>(F)
where
    F: Fn(&dyn StateReader, &HeadAction) + Send + Sync;

impl<F> FnMiddleware<F>
where
    F: Fn(&dyn StateReader, &HeadAction) + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> Middleware for FnMiddleware<F>
where
    F: Fn(&dyn StateReader, &HeadAction) + Send + Sync,
{
    fn on_action(&self, state: &dyn StateReader, action: &HeadAction) {
        (self.0)(state, action);
    }
}

/// Logs every dispatched action via `tracing`.
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn on_action(&self, _state: &dyn StateReader, action: &HeadAction) {
        match action {
            HeadAction::TitleSet { title } => debug!(title = %title, "title set"),
            HeadAction::UnreadCountSet { count } => debug!(count, "unread count set"),
            HeadAction::SelectedSiteSet { site_id } => debug!(?site_id, "selected site set"),
            HeadAction::GroupSet { group } => debug!(?group, "group set"),
            HeadAction::SitesReceived { sites } => {
                debug!("{} site(s) received", sites.len());
            }
        }
    }
}

/// State plus an ordered middleware chain.
///
/// ```ignore
/// let mut store = Store::new(HeadState::default())
///     .with(LoggingMiddleware)
///     .with(DocumentTitleMiddleware::new(sink.clone()));
/// store.dispatch(HeadAction::title_set("Reader"));
/// ```
pub struct Store {
    state: HeadState,
    middleware: Vec<Box<dyn Middleware>>,
}

impl Store {
    pub fn new(state: HeadState) -> Self {
        Self {
            state,
            middleware: Vec::new(),
        }
    }

    /// Add a middleware to the chain. Middleware runs in registration order.
    pub fn with(mut self, middleware: impl Middleware + 'static) -> Self {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Conditionally add a middleware; a no-op when `condition` is `false`.
    pub fn with_if(self, condition: bool, middleware: impl Middleware + 'static) -> Self {
        if condition { self.with(middleware) } else { self }
    }

    pub fn state(&self) -> &HeadState {
        &self.state
    }

    /// Run `action` through every middleware, then reduce it into the state.
    pub fn dispatch(&mut self, action: HeadAction) {
        trace!(kind = action.kind(), "dispatch");
        for middleware in &self.middleware {
            middleware.on_action(&self.state, &action);
        }
        self.state.reduce(&action);
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(HeadState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn middleware_runs_in_order_before_reduce() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let first = seen.clone();
        let second = seen.clone();

        let mut store = Store::default()
            .with(FnMiddleware::new(move |state, _| {
                first.lock().unwrap().push(format!("first:{}", state.title()));
            }))
            .with(FnMiddleware::new(move |state, _| {
                second.lock().unwrap().push(format!("second:{}", state.title()));
            }));

        store.dispatch(HeadAction::title_set("Reader"));
        assert_eq!(*seen.lock().unwrap(), vec!["first:", "second:"]);
        assert_eq!(store.state().title, "Reader");
    }

    #[test]
    fn action_reaches_reducer_unchanged() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut store = Store::default()
            .with(LoggingMiddleware)
            .with(FnMiddleware::new(move |_, action| {
                sink.lock().unwrap().push(action.clone());
            }));

        let action = HeadAction::unread_count_set(4);
        store.dispatch(action.clone());
        assert_eq!(*seen.lock().unwrap(), vec![action]);
        assert_eq!(store.state().unread_count, Some(4));
    }

    #[test]
    fn with_if_skips_when_false() {
        let count = Arc::new(Mutex::new(0));
        let c = count.clone();
        let mut store = Store::default().with_if(
            false,
            FnMiddleware::new(move |_, _| *c.lock().unwrap() += 1),
        );
        store.dispatch(HeadAction::title_set("x"));
        assert_eq!(*count.lock().unwrap(), 0);
    }
}
