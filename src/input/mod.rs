//! Input adapters that turn platform events into interaction events.

#[cfg(feature = "gui")]
pub mod gui;
