//! Flutter-facing bridge for the TinyCare core.

pub mod api;
