mod core;
mod model;

pub use self::core::ParserEngine;
pub use self::model::*;
