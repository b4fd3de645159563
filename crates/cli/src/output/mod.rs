//! Renders entities, pages and demo reports for the terminal.
//!
//! `--format json` goes through [`json`]; everything else through [`pretty`].

pub mod json;
pub mod pretty;
