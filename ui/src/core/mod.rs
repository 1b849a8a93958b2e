//! Platform-agnostic state shared by every view.

pub mod language;
pub mod platform;
pub mod shell;
pub mod storage;
pub mod viewport;
