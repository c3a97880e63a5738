// Bracket token interpolator

use crate::TextIntpError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Substitution table. A key maps to its replacement text; a `None` value
/// is a present key without a usable replacement and behaves the same as
/// a missing key.
pub type Substitutions = HashMap<String, Option<String>>;

// Compiled once, shared by all calls. Non-greedy: a token ends at the
// nearest closing bracket and never crosses a line break.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.+?\]").unwrap());

/// Interpolate an input string with the given substitutions, using the
/// following syntax:
///
/// ```text
///    Hello [name]
/// ```
///
/// Every `[key]` token whose key is found in the table with a non-empty
/// replacement is substituted, all occurrences at once:
///
/// ```rust
///    use textintp::tpl::{self, Substitutions};
///
///    let mut values = Substitutions::new();
///    values.insert("name".to_string(), Some("Jane".to_string()));
///    assert_eq!(tpl::interpolate(Some("Hello [name]"), Some(&values)).unwrap(), "Hello Jane");
/// ```
///
/// Square brackets can be escaped by doubling them: `[[hello]]` yields the
/// literal `[hello]` and is never treated as a token. A key that is missing
/// from the table, or present with a `None`, empty or whitespace-only
/// replacement, keeps its token in place. Replacements are inserted
/// verbatim, without another interpolation round.
///
/// The input must contain something other than whitespace and the table
/// must be supplied, even if empty; otherwise an error is returned before
/// any scanning happens.
pub fn interpolate(input: Option<&str>, values: Option<&Substitutions>) -> Result<String, TextIntpError> {
    let input = match input {
        Some(s) if !s.trim().is_empty() => s,
        _ => return Err(TextIntpError::InvalidInput("An input string is required to interpolate".to_string())),
    };

    let Some(values) = values else {
        return Err(TextIntpError::NoSubstitutions("A table of substitutions is required".to_string()));
    };

    // Escapes collapse first, on a working copy. Tokens are scanned on the
    // original input, so collapsed brackets are never re-interpreted.
    let mut out = input.replace("[[", "[").replace("]]", "]");

    for tkn in TOKEN.find_iter(input) {
        let key = tkn.as_str().trim_matches(['[', ']']);
        match values.get(key) {
            Some(Some(sub)) if !sub.trim().is_empty() => {
                out = out.replace(tkn.as_str(), sub);
            }
            Some(_) => log::trace!("Token '{key}' has no usable replacement, keeping it"),
            None => log::trace!("No substitution for '{key}'"),
        }
    }

    Ok(out)
}

/// Get a list of all token keys, mentioned in an input string. For example,
/// the following input:
///
/// ```text
///   foo bar [baz] toto [spam] here
/// ```
///
/// will return this list:
/// - `baz`
/// - `spam`
///
/// Keys are returned in order of appearance, duplicates included. No
/// validation and no substitution is done here.
pub fn extract(input: &str) -> Vec<String> {
    TOKEN.find_iter(input).map(|tkn| tkn.as_str().trim_matches(['[', ']']).to_string()).collect()
}
