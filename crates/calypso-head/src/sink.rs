//! Where the composed page title ends up.

use std::sync::{Arc, Mutex};

/// The externally visible page title.
///
/// Injected into [`DocumentTitleMiddleware`](crate::document_title::DocumentTitleMiddleware),
/// which reads it back to skip redundant writes.
pub trait TitleSink: Send + Sync {
    /// The title currently applied.
    fn get(&self) -> String;
    fn set(&self, title: &str);
}

#[derive(Debug, Default)]
struct SinkState {
    title: String,
    writes: usize,
}

/// A [`TitleSink`] held in memory that counts writes.
///
/// Clones share the same slot, so tests and frontends can keep a handle
/// while the middleware owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryTitleSink(Arc<Mutex<SinkState>>);

impl MemoryTitleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose slot already holds `title`. Does not count as a write.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self(Arc::new(Mutex::new(SinkState {
            title: title.into(),
            writes: 0,
        })))
    }

    /// Number of [`set`](TitleSink::set) calls so far.
    pub fn writes(&self) -> usize {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).writes
    }
}

impl TitleSink for MemoryTitleSink {
    fn get(&self) -> String {
        self.0
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .title
            .clone()
    }

    fn set(&self, title: &str) {
        let mut state = self.0.lock().unwrap_or_else(|e| e.into_inner());
        state.title = title.to_string();
        state.writes += 1;
    }
}

impl<S: TitleSink + ?Sized> TitleSink for Arc<S> {
    fn get(&self) -> String {
        (**self).get()
    }

    fn set(&self, title: &str) {
        (**self).set(title);
    }
}
