//! Integration tests for Layer 2: Parser
//!
//! Tests for classifying input lines into commands.
