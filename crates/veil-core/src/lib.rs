//! Shared types for the veil word-detection engine.
//!
//! - [`character`] -- case folding and the stage-1 character class
//! - [`wildcard`] -- wildcard-aware string equality
//! - [`pattern`] -- registered patterns and their derived forms
//! - [`context`] -- match results and the context handed to validators

pub mod character;
pub mod context;
pub mod pattern;
pub mod wildcard;
