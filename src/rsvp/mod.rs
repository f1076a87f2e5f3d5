//! The RSVP flow: which form is showing and what happens on submit.

pub mod view;

pub use view::{Phase, RsvpView, Submission, ViewEffect};
