//! Small calculators for probability and information theory exercises.
//!
//! - [`cards`]: counting five-card hands with two red pairs
//! - [`information`] and [`session`]: self-information and entropy of a
//!   discrete distribution, entered interactively
//! - [`trajectory`]: i.i.d. symbol streams drawn from a random categorical
//!   distribution

pub mod cards;
pub mod console;
pub mod error;
pub mod information;
pub mod logging;
pub mod session;
pub mod trajectory;

pub use error::{Error, Result};
