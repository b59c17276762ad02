//! Low-level primitives and utilities
//!
//! This module contains the pure text transformations the pager is built on:
//! display width measurement, line wrapping and bionic emphasis.

pub mod bionic;
pub mod display_width;
pub mod line_wrapping;
