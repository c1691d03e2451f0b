//! Integration tests for Layer 1: Storage
//!
//! Tests for the room arena, exits, and the seeded dungeon.

mod world;
