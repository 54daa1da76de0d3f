// ============================================================================
// domain/ident.rs - IDENTIFIER DERIVATION
// ============================================================================

//! Identifier derivation for module scaffolding.
//!
//! A raw module name ("my cool module", "User", "blog-post") collapses into
//! two fixed spellings used across every generated file:
//!
//! - **canonical**: the camelCase stem (`myCoolModule`), used for file names
//!   and value-level symbols
//! - **title**: the canonical form with its first character upper-cased
//!   (`MyCoolModule`), used for type-level symbols
//!
//! The title form is always derived FROM the canonical form. Deriving it
//! from the raw input would drop the interior capitals introduced by
//! camel-casing and the generated files would disagree on symbol names.

use std::fmt;

use crate::domain::error::DomainError;

/// Collapse a raw name into its camelCase canonical form.
///
/// The input is split into words at runs of characters outside
/// `[a-zA-Z0-9]` (the runs are dropped) and at case transitions, so names
/// that are already camel-cased keep their word structure. Each word is
/// lower-cased; every word after the first gets its first letter
/// upper-cased. Leading and trailing delimiter runs vanish without
/// affecting any character, and canonical output re-canonicalizes to
/// itself: `to_canonical(to_canonical(s)) == to_canonical(s)`.
///
/// Digits are kept but never upper-cased ("my 2nd api" -> "my2ndApi").
///
/// # Example
///
/// ```
/// use modex_core::domain::ident::to_canonical;
///
/// assert_eq!(to_canonical("my cool module"), "myCoolModule");
/// assert_eq!(to_canonical("User"), "user");
/// assert_eq!(to_canonical("blog--post"), "blogPost");
/// ```
pub fn to_canonical(input: &str) -> String {
    let words = split_words(input);
    let mut out = String::with_capacity(input.len());

    for (i, word) in words.iter().enumerate() {
        let lower = word.to_lowercase();
        if i == 0 {
            out.push_str(&lower);
        } else {
            out.push_str(&upper_first(&lower));
        }
    }

    out
}

/// Upper-case only the first character, leaving the rest untouched.
pub fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Split into words at delimiter runs and case transitions.
///
/// A word boundary sits at: any run of non-alphanumeric characters
/// (dropped entirely), a lower-case letter or digit followed by an
/// upper-case letter, and the end of an upper-case run when the next
/// letter is lower-case ("HTTPServer" -> ["HTTP", "Server"]).
fn split_words(input: &str) -> Vec<String> {
    let chars: Vec<char> = input.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &ch) in chars.iter().enumerate() {
        if !ch.is_ascii_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        if !current.is_empty() {
            // `current` is non-empty, so the previous char was alphanumeric.
            let prev = chars[i - 1];
            let hump = (prev.is_ascii_lowercase() || prev.is_ascii_digit())
                && ch.is_ascii_uppercase();
            let acronym_end = prev.is_ascii_uppercase()
                && ch.is_ascii_uppercase()
                && chars.get(i + 1).is_some_and(|next| next.is_ascii_lowercase());
            if hump || acronym_end {
                words.push(std::mem::take(&mut current));
            }
        }

        current.push(ch);
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}

/// The two derived spellings of a module name.
///
/// Both fields are computed once by [`ModuleIdent::derive`] and never
/// change; all generated file and symbol names flow from this pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleIdent {
    canonical: String,
    title: String,
}

impl ModuleIdent {
    /// Derive both spellings from raw user input.
    ///
    /// Fails when the input contains no ASCII alphanumerics at all, since
    /// nothing usable would remain as a file stem.
    pub fn derive(raw: &str) -> Result<Self, DomainError> {
        let canonical = to_canonical(raw);
        if canonical.is_empty() {
            return Err(DomainError::UnusableModuleName {
                name: raw.to_string(),
            });
        }
        let title = upper_first(&canonical);
        Ok(Self { canonical, title })
    }

    /// camelCase stem for file names and value-level symbols.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// Upper-first form for type-level symbols.
    pub fn title(&self) -> &str {
        &self.title
    }
}

impl fmt::Display for ModuleIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Inputs covering delimiters, casing, digits, and unicode oddities.
    const CORPUS: &[&str] = &[
        "my cool module",
        "User",
        "blog-post",
        "blog--post",
        "  padded  name  ",
        "snake_case_name",
        "SCREAMING NAME",
        "FooBar",
        "myCoolModule",
        "HTTPServer",
        "already",
        "my 2nd api",
        "2fast 2furious",
        "order.item.v2",
        "!!leading",
        "trailing!!",
        "a",
        "héllo wörld",
    ];

    #[test]
    fn canonicalizes_spaced_words() {
        assert_eq!(to_canonical("my cool module"), "myCoolModule");
    }

    #[test]
    fn lowercases_single_words() {
        assert_eq!(to_canonical("User"), "user");
        assert_eq!(to_canonical("SCREAMING"), "screaming");
    }

    #[test]
    fn keeps_existing_camel_humps() {
        assert_eq!(to_canonical("myCoolModule"), "myCoolModule");
        assert_eq!(to_canonical("FooBar"), "fooBar");
        assert_eq!(to_canonical("HTTPServer"), "httpServer");
    }

    #[test]
    fn collapses_delimiter_runs() {
        assert_eq!(to_canonical("blog--post"), "blogPost");
        assert_eq!(to_canonical("snake_case_name"), "snakeCaseName");
        assert_eq!(to_canonical("SCREAMING NAME"), "screamingName");
    }

    #[test]
    fn drops_leading_and_trailing_runs() {
        assert_eq!(to_canonical("!!leading"), "leading");
        assert_eq!(to_canonical("trailing!!"), "trailing");
        assert_eq!(to_canonical("  padded  name  "), "paddedName");
    }

    #[test]
    fn keeps_digits_without_uppercasing() {
        assert_eq!(to_canonical("my 2nd api"), "my2ndApi");
        assert_eq!(to_canonical("2fast 2furious"), "2fast2furious");
        assert_eq!(to_canonical("order.item.v2"), "orderItemV2");
    }

    #[test]
    fn canonical_output_is_ascii_alphanumeric() {
        for input in CORPUS {
            let canonical = to_canonical(input);
            assert!(
                canonical.chars().all(|c| c.is_ascii_alphanumeric()),
                "non-alphanumeric output for {input:?}: {canonical:?}"
            );
        }
    }

    #[test]
    fn canonical_is_idempotent() {
        for input in CORPUS {
            let once = to_canonical(input);
            let twice = to_canonical(&once);
            assert_eq!(once, twice, "not a fixed point for {input:?}");
        }
    }

    #[test]
    fn upper_first_changes_only_the_first_char() {
        for input in CORPUS {
            let canonical = to_canonical(input);
            let title = upper_first(&canonical);
            assert!(
                title
                    .chars()
                    .next()
                    .is_some_and(|c| !c.is_ascii_lowercase()),
                "first char still lower-case for {input:?}: {title:?}"
            );
            assert_eq!(
                title.chars().skip(1).collect::<String>(),
                canonical.chars().skip(1).collect::<String>(),
                "tail changed for {input:?}"
            );
        }
    }

    #[test]
    fn derives_both_spellings() {
        let ident = ModuleIdent::derive("my cool module").unwrap();
        assert_eq!(ident.canonical(), "myCoolModule");
        assert_eq!(ident.title(), "MyCoolModule");

        let ident = ModuleIdent::derive("User").unwrap();
        assert_eq!(ident.canonical(), "user");
        assert_eq!(ident.title(), "User");
    }

    #[test]
    fn rejects_names_without_alphanumerics() {
        assert!(ModuleIdent::derive("!!!").is_err());
        assert!(ModuleIdent::derive("   ").is_err());
        assert!(ModuleIdent::derive("").is_err());
    }

    #[test]
    fn display_shows_canonical_form() {
        let ident = ModuleIdent::derive("Order Item").unwrap();
        assert_eq!(ident.to_string(), "orderItem");
    }
}
