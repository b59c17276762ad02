// Pager library - exposes all core modules for the binaries and tests

pub mod app;
pub mod config;
pub mod error;
pub mod model;
pub mod primitives;
pub mod services;
pub mod view;
