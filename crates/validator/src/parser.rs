//! Rule expression parsing
//!
//! A rule expression is a pipe-delimited list of rules, each optionally followed by
//! a colon and comma-separated arguments:
//!
//! ```text
//! required|minlength:3|startWith:Mr,Mrs,Ms
//! ```
//!
//! Parsing never fails. Whether a name is a known rule is checked later against a
//! [`RuleRegistry`](crate::rules::RuleRegistry), because the registry is open.

use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

/// Ordered rule arguments. Most rules take zero to two.
pub type Args = SmallVec<[String; 4]>;

// ============================================================================
// ARGUMENT SPLITTER
// ============================================================================

/// Splits a raw argument string on commas and trims every token.
///
/// Empty or whitespace-only input yields no arguments. There is no quoting:
/// a comma always separates two arguments, so `"a,,b"` yields three tokens.
///
/// # Examples
///
/// ```
/// use quickv_validator::parser::split_args;
///
/// assert_eq!(split_args(" Mr , Mrs,Ms ").as_slice(), ["Mr", "Mrs", "Ms"]);
/// assert!(split_args("  ").is_empty());
/// ```
pub fn split_args(raw: &str) -> Args {
    if raw.trim().is_empty() {
        return Args::new();
    }
    raw.split(',').map(|token| token.trim().to_owned()).collect()
}

// ============================================================================
// RULE INVOCATION
// ============================================================================

/// One parsed `name:args` segment of a rule expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleInvocation {
    name: String,
    args: Args,
    // argument text as written, before comma splitting
    raw_args: String,
}

impl RuleInvocation {
    /// Creates an invocation from an already split name and argument list.
    pub fn new<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Args = args.into_iter().map(Into::into).collect();
        Self {
            name: name.into(),
            raw_args: args.join(","),
            args,
        }
    }

    /// Parses a single segment. The caller has already removed the pipes.
    fn from_segment(segment: &str) -> Self {
        match segment.split_once(':') {
            Some((name, raw_args)) => Self {
                name: name.trim().to_owned(),
                args: split_args(raw_args),
                raw_args: raw_args.trim().to_owned(),
            },
            None => Self {
                name: segment.trim().to_owned(),
                args: Args::new(),
                raw_args: String::new(),
            },
        }
    }

    /// The rule name, e.g. `minlength`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All arguments in the order they were written.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// The argument text after the first `:`, unsplit and with only its ends trimmed.
    ///
    /// Pattern rules read this so that `regex:^a, b$` keeps the space after the comma.
    pub fn raw_args(&self) -> &str {
        &self.raw_args
    }

    /// The `index`-th argument, if present.
    pub fn arg(&self, index: usize) -> Option<&str> {
        self.args.get(index).map(String::as_str)
    }
}

impl fmt::Display for RuleInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.args.is_empty() {
            write!(f, ":{}", self.args.join(","))?;
        }
        Ok(())
    }
}

impl FromStr for RuleInvocation {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_segment(s))
    }
}

// ============================================================================
// RULE EXPRESSION PARSER
// ============================================================================

/// Parses a pipe-delimited rule expression into invocations, preserving order.
///
/// Blank segments are dropped, so `"required||min:3|"` yields two invocations.
///
/// # Examples
///
/// ```
/// use quickv_validator::parser::parse;
///
/// let rules = parse("required|between:1, 10");
/// assert_eq!(rules.len(), 2);
/// assert_eq!(rules[1].name(), "between");
/// assert_eq!(rules[1].args(), ["1", "10"]);
/// ```
pub fn parse(expr: &str) -> Vec<RuleInvocation> {
    expr.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(RuleInvocation::from_segment)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
