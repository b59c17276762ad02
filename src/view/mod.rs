//! View and UI layer
//!
//! This module contains all presentation and rendering components.

pub mod page;
pub mod status_bar;
