//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls and pure derivation into use-case APIs.
//! - Keep UI/FFI layers decoupled from storage details and from the clock.

pub mod journal_service;
pub mod plan_service;
