//! # latexfmt - LaTeX Source Formatter
//!
//! latexfmt reformats LaTeX source text to a one-sentence-per-line
//! discipline: ragged short lines belonging to the same sentence are joined,
//! each completed sentence is put on its own line, and overlong sentences are
//! wrapped at a configurable column (80 by default). Comment lines,
//! sectioning commands, and the bodies of environments such as `equation` or
//! `figure` are passed through verbatim, so the formatter is safe to run over
//! whole documents.
//!
//! Keeping one sentence per source line makes version-control diffs of prose
//! minimal: editing a sentence touches exactly one line.
//!
//! ## Usage
//!
//! ### As a Library
//!
//! ```rust
//! use latexfmt::formatter::{FormatOptions, format_source};
//!
//! let latex_source = "\
//! In this paper, we consider a
//! network consisting of a cascade
//! of cavities. The network is depicted
//! in \\Fig{network}.
//! ";
//!
//! let formatted = format_source(latex_source, &FormatOptions::default());
//! assert_eq!(
//!     formatted,
//!     "In this paper, we consider a network consisting of a cascade of cavities.\n\
//!      The network is depicted in \\Fig{network}.\n"
//! );
//! ```
//!
//! ### As a CLI Tool
//!
//! The library is also available as a command-line tool. See the `main`
//! module for CLI usage details.
//!
//! ## Modules
//!
//! - [`classify`] - Per-line classification and sentence-boundary detection
//! - [`formatter`] - Core formatting logic and public API
//!
//! ## Limitations
//!
//! - Sentence detection is heuristic: a period after a lowercase letter,
//!   digit, `@`, `$`, or `}` ends a sentence unless followed by `\` or `~`,
//!   so abbreviations like `e.g.` are treated as sentence ends
//! - Indentation inside environments is preserved, not normalized, but
//!   blank-line collapsing applies inside environments too
//! - Wrapping splits on ASCII spaces only

/// Line classification and sentence-boundary detection
pub mod classify;

/// Core formatting engine and public API
pub mod formatter;
