//! Narrated trace of the Inkly canvas drawing event flow
//!
//! Prints what the browser game's drawing handlers should do for one
//! stroke, the expected event order and the expected canvas properties,
//! as a checklist for debugging the page by hand.

pub mod choices;
pub mod drawing;
pub mod impls;
pub mod models;
pub mod report;
pub mod utils;

pub use report::{run, ReportOptions};
