//! Application layer: the navigation state machine, the interactive session
//! loop that drives it, and the flash reader.

pub mod flash;
pub mod pager;
pub mod session;

pub use pager::{Action, Pager, PagerState};
