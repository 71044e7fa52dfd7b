//! Convenience re-exports for wiring a store with title middleware.
//!
//! ```ignore
//! use calypso_head::prelude::*;
//! ```

pub use crate::{
    DocumentTitleMiddleware, FnMiddleware, HeadAction, HeadConfig, HeadState, LoggingMiddleware,
    MemoryTitleSink, Middleware, StateReader, Store, TitleSink,
};
pub use calypso_site::Site;
