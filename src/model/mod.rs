//! Core data model for documents
//!
//! This module contains pure data structures with minimal external dependencies.

pub mod document;
