//! Builder module for `fluentargs`.
//! See [documentation root](https://docs.rs/fluentargs/latest/fluentargs/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod matcher;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use matcher::{ParsedOption, ParserEngine, ParserEngineResult};
pub use model::*;
pub use parser::{
    CommandLineParserResult, OptionFormatter, OptionSummary, ParseError, SetupError,
};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
