#![forbid(unsafe_code)]

pub mod model;
pub mod study;
pub mod time;
