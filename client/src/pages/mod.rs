//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Home and About are static copy driven by const arrays;
//! Detection drives the `state::detection` machine.

pub mod about;
pub mod detection;
pub mod home;
