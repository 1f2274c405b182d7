//! Unit tests for timeline-markers.

mod config_tests;
