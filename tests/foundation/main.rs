//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: groups, rules, rulesets, and errors.

mod groups;
mod rulesets;
