//! Input adapters for the explorer.
//!
//! These translate command lines and window events into configuration and
//! [`NavigationEvent`](crate::controllers::viewport::NavigationEvent)s.

pub mod cli;
#[cfg(feature = "gui")]
pub mod gui;
pub mod pointer_gestures;
pub mod screen_mapping;
