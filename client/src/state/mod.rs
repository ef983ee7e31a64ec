//! Plain data types rendered by the UI.
//!
//! DESIGN
//! ======
//! State here is framework-free so it can be constructed and asserted on in
//! unit tests without a reactive runtime.

pub mod feed;
pub mod viewport;
