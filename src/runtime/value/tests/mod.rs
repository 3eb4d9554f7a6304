//! Tests for core value types

mod clone;
