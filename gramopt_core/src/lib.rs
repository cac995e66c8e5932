//! Engine module for `gramopt`.
//! See [documentation root](https://docs.rs/gramopt/latest/gramopt/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod grammar;
mod matcher;
mod model;
mod registry;
mod validate;

pub use api::*;
pub use grammar::Definitions;
pub use matcher::ParsedArgs;
pub use model::*;
pub use validate::{is_integer, is_numeric};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
