//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page binds data to a layout and delegates rendering details to
//! `components`.

pub mod home;
