//! Structural patterns: how objects are composed.

pub mod adapter;
pub mod bridge;
pub mod decorator;
pub mod flyweight;
