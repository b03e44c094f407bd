extern crate self as blockbuilder_core;

pub mod log;

pub use ::log::{debug, error, info, trace, warn};
