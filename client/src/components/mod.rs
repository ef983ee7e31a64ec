//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions from static feed data to view trees. The
//! only context they read is the viewport signal used for breakpoints.

pub mod fallback_image;
pub mod feed;
pub mod header_bar;
pub mod icon;
pub mod post_card;
pub mod root_layout;
pub mod story_tray;
pub mod suggestions_panel;
