pub mod modal;
pub mod platform;
pub mod storage;
pub mod style;
