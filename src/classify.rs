//! Line classification for LaTeX source text
//!
//! The formatter never builds a syntax tree. Instead it decides, line by line,
//! whether a line must be protected (emitted verbatim) or may be joined with
//! its neighbours and rewrapped. This module holds the compiled patterns and
//! the sentence-boundary detection that drive those decisions.
//!
//! # Example
//!
//! ```rust
//! use latexfmt::classify::{is_comment, is_sectioning, split_first_sentence};
//!
//! assert!(is_comment("plain text % with a trailing comment"));
//! assert!(is_sectioning("\\section{Introduction}"));
//!
//! let (first, rest) = split_first_sentence("A cascade of cavities. More text").unwrap();
//! assert_eq!(first, "A cascade of cavities.");
//! assert_eq!(rest, "More text");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a line containing a comment: a `%` not preceded by a backslash.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:.*[^\\]|\s*)%").unwrap());

/// Matches sectioning commands that must stay on their own line.
static SECTIONING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*\\(?:part|chapter|section|subsection|subsubsection|image)").unwrap()
});

/// Matches `\begin{document}` / `\begin{abstract}`.
static BEGIN_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\begin\{(?:document|abstract)").unwrap());

/// Matches `\end{document}` / `\end{abstract}`.
static END_DOC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\\end\{(?:document|abstract)").unwrap());

/// Candidate sentence-ending periods: a `.` immediately preceded by a
/// character that can plausibly end a sentence. Periods after capital
/// letters (initials such as `E. Schmidt`) are excluded by the character
/// class.
static FULL_STOP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[@$}0-9a-z]\.").unwrap());

/// Returns true if the line contains an unescaped `%` comment.
pub fn is_comment(line: &str) -> bool {
    COMMENT.is_match(line)
}

/// Returns true if the line starts a sectioning command (`\section` etc.).
pub fn is_sectioning(line: &str) -> bool {
    SECTIONING.is_match(line)
}

/// Returns true if the line opens or closes the `document` or `abstract`
/// environment. These boundaries are kept verbatim but do not open a group,
/// so the prose inside them is still reformatted.
pub fn is_document_boundary(line: &str) -> bool {
    BEGIN_DOC.is_match(line) || END_DOC.is_match(line)
}

/// Returns true if the line must be emitted verbatim and never joined with
/// neighbouring lines: comment lines, sectioning commands, and
/// document/abstract boundaries.
pub fn is_protected(line: &str) -> bool {
    is_comment(line) || is_sectioning(line) || is_document_boundary(line)
}

/// Net number of environment groups opened by this line: occurrences of
/// `\begin` minus occurrences of `\end`.
pub fn group_delta(line: &str) -> i64 {
    let begins = line.matches(r"\begin").count() as i64;
    let ends = line.matches(r"\end").count() as i64;
    begins - ends
}

/// Split off the first complete sentence of `line`.
///
/// A sentence ends at a period immediately preceded by one of `@ $ } 0-9 a-z`
/// and not immediately followed by `\` or `~` (so `\Fig.~3` and literal
/// command sequences are not treated as sentence ends). Returns the sentence
/// including its period and the left-trimmed remainder, or `None` if the line
/// contains no sentence-ending period.
///
/// ```rust
/// use latexfmt::classify::split_first_sentence;
///
/// let (first, rest) = split_first_sentence("in \\Fig{network}. Next").unwrap();
/// assert_eq!(first, "in \\Fig{network}.");
/// assert_eq!(rest, "Next");
/// assert!(split_first_sentence("no full stop here").is_none());
/// ```
pub fn split_first_sentence(line: &str) -> Option<(&str, &str)> {
    for m in FULL_STOP.find_iter(line) {
        let end = m.end();
        let next = line[end..].chars().next();
        if !matches!(next, Some('\\') | Some('~')) {
            return Some((&line[..end], line[end..].trim_start()));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_lines() {
        assert!(is_comment("% a pure comment line"));
        assert!(is_comment("text before % comment after"));
        assert!(!is_comment("escaped \\% is not a comment"));
        assert!(is_comment("escaped \\% but a real % later"));
        assert!(!is_comment("no percent at all"));
    }

    #[test]
    fn sectioning_commands() {
        assert!(is_sectioning("\\section{Model}"));
        assert!(is_sectioning("\\subsubsection{Details}"));
        assert!(is_sectioning("\\chapter{One}"));
        assert!(!is_sectioning("\\textbf{bold}"));
    }

    #[test]
    fn document_boundaries() {
        assert!(is_document_boundary("\\begin{document}"));
        assert!(is_document_boundary("\\end{abstract}"));
        assert!(!is_document_boundary("\\begin{equation}"));
        // Boundaries are protected but contribute no group delta in the
        // formatter, so body text keeps getting reformatted.
        assert!(is_protected("\\begin{document}"));
    }

    #[test]
    fn group_deltas() {
        assert_eq!(group_delta("\\begin{figure}[tb]"), 1);
        assert_eq!(group_delta("\\end{figure}"), -1);
        assert_eq!(group_delta("\\begin{a}\\end{a}"), 0);
        assert_eq!(group_delta("plain prose"), 0);
    }

    #[test]
    fn sentence_splitting() {
        let (first, rest) = split_first_sentence("of cavities. The network").unwrap();
        assert_eq!(first, "of cavities.");
        assert_eq!(rest, "The network");

        // Period followed by a tie or a command does not end a sentence.
        assert!(split_first_sentence("see \\Fig{network}.~3").is_none());
        assert!(split_first_sentence("a literal dot.\\foo").is_none());

        // Period at end of line ends a sentence.
        let (first, rest) = split_first_sentence("in \\Fig{network}.").unwrap();
        assert_eq!(first, "in \\Fig{network}.");
        assert_eq!(rest, "");
    }

    #[test]
    fn sentence_splitting_skips_rejected_candidates() {
        // The first candidate period is vetoed by the following tie; the
        // second one is accepted.
        let (first, rest) = split_first_sentence("see \\eq{1}.~Then more. And rest").unwrap();
        assert_eq!(first, "see \\eq{1}.~Then more.");
        assert_eq!(rest, "And rest");
    }
}
