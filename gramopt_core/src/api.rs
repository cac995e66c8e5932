mod config;
mod core;
mod factory;
mod option;
mod rules;

pub use self::core::*;
pub use config::*;
pub use factory::*;
pub use option::*;
pub use rules::*;
