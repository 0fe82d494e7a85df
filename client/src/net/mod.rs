//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `predict` talks to the external inference endpoint; `api` talks to the
//! host server that serves this app.

pub mod api;
pub mod predict;
