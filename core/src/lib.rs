//! Asynchronous API client for a single `/heroes` REST collection.
//!
//! # Overview
//! [`HeroClient`] wraps the collection operations — list, get by id, create,
//! update, delete, plus name search — over one base URL. It performs no I/O
//! itself: requests go through an injected [`Transport`], and every outcome
//! is reported as one line to an injected [`Notifier`].
//!
//! # Design
//! - Failures never reach the caller. Each operation resolves to a success
//!   shape or to its fallback (empty vec / `None`) after logging, so the
//!   calling surface only ever sees "no data", not an error state.
//! - The raw error behind every fallback goes to the `tracing` diagnostic
//!   log; the notifier carries the human-readable summary.
//! - Collaborators are constructor-injected trait objects: unit tests script
//!   the transport and read the bundled [`MessageLog`] back.

pub mod client;
pub mod error;
pub mod notify;
pub mod transport;
pub mod types;

pub use client::HeroClient;
pub use error::TransportError;
pub use notify::{MessageLog, Notifier};
pub use transport::Transport;
pub use types::{Hero, HeroId, NewHero};
