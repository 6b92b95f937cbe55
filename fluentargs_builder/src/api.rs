mod core;
mod help;
mod option;
mod value;

pub use self::core::*;
pub use self::help::*;
pub use self::option::*;
pub use self::value::*;
