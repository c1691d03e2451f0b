//! Integration tests for Layer 3: Engine
//!
//! Tests for moving, looking, and taking.

mod navigation;
mod take;
