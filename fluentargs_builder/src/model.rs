/// How the names of an option are compared against the Cli input.
///
/// Comparison is always ordinal and never depends on the process locale.
/// Ignoring case folds each character on its own to its single character lowercase.
/// A character whose lowercase spans several characters (ex: `İ`) is compared as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// `-v` and `-V` are different options.
    CaseSensitive,
    /// `-v` and `-V` are the same option.
    CaseInsensitive,
}

impl CaseType {
    /// Compare `candidate` against `name` under this case rule.
    pub fn matches(&self, candidate: &str, name: &str) -> bool {
        match self {
            CaseType::CaseSensitive => candidate == name,
            CaseType::CaseInsensitive => candidate.chars().map(fold).eq(name.chars().map(fold)),
        }
    }
}

impl std::fmt::Display for CaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();

    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
