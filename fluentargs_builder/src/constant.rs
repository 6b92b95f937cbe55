pub(crate) const DOUBLE_DASH: &str = "--";
pub(crate) const SINGLE_DASH: &str = "-";
pub(crate) const SLASH: &str = "/";

// Precedence matters: "--" must be tried before "-".
pub(crate) const OPTION_PREFIXES: [&str; 3] = [DOUBLE_DASH, SINGLE_DASH, SLASH];

pub(crate) const ADDITIONAL_ARGUMENTS_TERMINATOR: &str = "--";

pub(crate) const VALUE_ASSIGNMENTS: [char; 2] = ['=', ':'];

pub(crate) const TRUE_SUFFIX: char = '+';
pub(crate) const FALSE_SUFFIX: char = '-';

pub(crate) const RESERVED_CHARACTERS: [char; 3] = ['=', ':', ' '];

pub(crate) const HELP_HEADER: &str = "options:";
