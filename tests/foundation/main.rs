//! Integration tests for Layer 0: Foundation
//!
//! Tests for items, the inventory list, and errors.

mod errors;
mod inventory;
