mod base;
mod coordinator;
mod help;
mod interface;
mod printer;
mod result;
mod validator;

pub(crate) use base::*;
pub(crate) use coordinator::*;
pub(crate) use help::*;
pub(crate) use interface::*;
pub(crate) use printer::ColumnFormatter;
pub use printer::OptionFormatter;
pub use result::*;
pub use validator::SetupError;
pub(crate) use validator::{NoDuplicateOptionValidator, OptionNameValidator, OptionValidator};
