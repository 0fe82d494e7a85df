//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `ui` holds chrome state shared through context (theme, mobile menu);
//! `detection` is the detection page's own view-state machine.

pub mod detection;
pub mod ui;
