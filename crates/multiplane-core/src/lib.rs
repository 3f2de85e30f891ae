//! Core types and definitions for the MULTIPLANE traffic pipeline.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, update records, and constants.
//! It has no dependency on the host platform or any runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod types;
pub mod updates;
