//! A terminal RSVP board for a single event.
//!
//! Visitors answer yes or no, responses are kept in a profile-local
//! key-value file, and the live totals count up on screen.

pub mod app;
pub mod config;
pub mod logging;
pub mod rsvp;
pub mod share;
pub mod store;
pub mod ui;
