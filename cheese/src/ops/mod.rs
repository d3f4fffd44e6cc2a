//! Core operations.
//!
//! This module contains the logic behind the stringcheese commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod locales;

pub use check::check;
pub use locales::locales;
