//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and presentational building blocks; the
//! only shared state they read is the `UiState` context and, for the results
//! grid, a detection state signal passed in by the page.

pub mod bento_grid;
pub mod card;
pub mod detection_results;
pub mod navbar;
