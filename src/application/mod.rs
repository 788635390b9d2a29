//! Application layer containing the session state machine.
//!
//! [`session::Session`] is the single event loop of the application: user actions,
//! countdown ticks and catalog fetch completions are serialized onto it and applied
//! to the [`app::AppController`], which publishes immutable [`view::AppView`] snapshots
//! for the presentation layer.

pub mod app;
pub mod events;
pub mod selection;
pub mod session;
pub mod timer;
pub mod view;
