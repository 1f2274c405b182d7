//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep link times down.
//!
//! Structure:
//! - integration: Multi-component workflow tests (gestures, lifecycle)
//! - unit: Single-component tests against the public API

mod helpers;
mod unit;
