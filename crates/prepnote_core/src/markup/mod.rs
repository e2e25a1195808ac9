//! Text markup helpers for renderer front-ends.
//!
//! # Responsibility
//! - Pre-split mixed prose/LaTeX content into typed segments so a renderer
//!   only has to dispatch, never parse.

pub mod math;
