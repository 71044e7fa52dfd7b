//! Document-head state and page title composition.
//!
//! A [`Store`] holds [`HeadState`] (base title, unread count, selected site,
//! active UI group, known sites) and runs every dispatched [`HeadAction`]
//! through an ordered chain of [`Middleware`] before reducing it.
//! [`DocumentTitleMiddleware`] is the one that matters: on title, unread
//! count, and site selection changes it composes a title such as
//! `(3) Reader ‹ Foo — WordPress.com` and writes it to an injected
//! [`TitleSink`], skipping the write when nothing changed.
//!
//! ```ignore
//! use calypso_head::prelude::*;
//!
//! let sink = MemoryTitleSink::new();
//! let mut store = Store::new(HeadState::default())
//!     .with(LoggingMiddleware)
//!     .with(DocumentTitleMiddleware::new(sink.clone()));
//!
//! store.dispatch(HeadAction::title_set("Reader"));
//! assert_eq!(sink.get(), "Reader — WordPress.com");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`actions`] | [`HeadAction`] and its JSON form |
//! | [`state`] | [`HeadState`], reducer, [`StateReader`] accessors |
//! | [`store`] | [`Middleware`] trait, [`Store`], logging and closure middleware |
//! | [`document_title`] | [`DocumentTitleMiddleware`] |
//! | [`title`] | [`format_title`], entity decoding |
//! | [`sink`] | [`TitleSink`] and the in-memory [`MemoryTitleSink`] |
//! | [`config`] | [`HeadConfig`]: product name, site-specific groups |

pub mod actions;
pub mod config;
pub mod document_title;
pub mod prelude;
pub mod sink;
pub mod state;
pub mod store;
pub mod title;

pub use actions::HeadAction;
pub use config::HeadConfig;
pub use document_title::DocumentTitleMiddleware;
pub use sink::{MemoryTitleSink, TitleSink};
pub use state::{HeadState, StateReader};
pub use store::{FnMiddleware, LoggingMiddleware, Middleware, Store};
pub use title::{decode_entities, format_title};
