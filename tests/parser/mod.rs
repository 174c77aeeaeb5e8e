//! Parser tests
//!
//! Tests for:
//! - Lossless round-trips of realistic route and configuration code
//! - Error recovery

pub mod tests_java_parser;
