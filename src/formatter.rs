//! Core formatting engine for LaTeX source text
//!
//! The formatter enforces a one-sentence-per-source-line discipline: short
//! physical lines belonging to the same sentence are joined, every completed
//! sentence becomes its own output line, and sentences longer than the wrap
//! width are rewrapped at word boundaries. Comment lines, sectioning commands,
//! and the non-blank lines of environment bodies pass through verbatim;
//! blank-line collapsing applies everywhere, environments included.
//!
//! # Example
//!
//! ```rust
//! use latexfmt::formatter::{FormatOptions, format_source};
//!
//! let source = "We consider a\nnetwork of cavities. The network\nis depicted in \\Fig{network}.\n";
//!
//! let formatted = format_source(source, &FormatOptions::default());
//! assert_eq!(
//!     formatted,
//!     "We consider a network of cavities.\nThe network is depicted in \\Fig{network}.\n"
//! );
//! ```

use crate::classify::{group_delta, is_protected, split_first_sentence};
use textwrap::{Options as WrapOptions, WordSeparator, WordSplitter, WrapAlgorithm};

/// Output mode for the formatter
///
/// Determines how the formatted text should be handled after processing.
#[derive(Clone, Copy, Debug)]
pub enum Mode {
    /// Print formatted text to stdout
    Stdout,
    /// Write formatted text back to source files
    Write,
    /// Check if formatting would change the text (used for CI/validation)
    Check,
}

/// Configuration options for the formatter
///
/// # Example
///
/// ```rust
/// use latexfmt::formatter::{FormatOptions, Mode};
///
/// let opts = FormatOptions {
///     width: 72,          // wrap paragraph text at column 72
///     mode: Mode::Write,  // write changes back to files
/// };
/// ```
pub struct FormatOptions {
    /// Column at which accumulated sentences are wrapped
    pub width: usize,
    /// How to handle the formatted output
    pub mode: Mode,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            width: 80,
            mode: Mode::Stdout,
        }
    }
}

#[derive(Debug)]
struct FormatterState {
    /// Completed output blocks; an empty string is a paragraph separator.
    blocks: Vec<String>,
    /// Sentence fragments joined so far, single-space separated.
    cat_line: String,
    /// Environments currently open; while nonzero, lines pass through verbatim.
    open_groups: i64,
    /// A paragraph break was seen; materialized before the next block so that
    /// runs of blank lines collapse to a single separator.
    separator_pending: bool,
}

impl FormatterState {
    fn new() -> Self {
        Self {
            blocks: Vec::new(),
            cat_line: String::new(),
            open_groups: 0,
            separator_pending: false,
        }
    }

    fn push_block(&mut self, block: String) {
        if self.separator_pending && !self.blocks.is_empty() {
            self.blocks.push(String::new());
        }
        self.separator_pending = false;
        log::debug!("emit block: {:?}", block);
        self.blocks.push(block);
    }

    /// Wrap and emit the accumulated sentence text, if any.
    fn flush(&mut self, width: usize) {
        if self.cat_line.is_empty() {
            return;
        }
        let wrapped = wrap_paragraph(self.cat_line.trim(), width);
        self.cat_line.clear();
        self.push_block(wrapped);
    }

    fn append_fragment(&mut self, fragment: &str) {
        if !self.cat_line.is_empty() {
            self.cat_line.push(' ');
        }
        self.cat_line.push_str(fragment);
    }

    /// Process one non-blank physical line, possibly emitting several blocks.
    fn feed(&mut self, raw: &str, width: usize) {
        log::debug!("feed line: {:?} (open_groups {})", raw, self.open_groups);
        let mut line = raw;
        loop {
            let trimmed = line.trim();
            if is_protected(trimmed) {
                if self.cat_line.is_empty() {
                    // Keep leading indentation, drop trailing whitespace.
                    self.push_block(line.trim_end().to_owned());
                    return;
                }
                self.flush(width);
                continue;
            }
            let delta = group_delta(trimmed);
            if delta != 0 || self.open_groups != 0 {
                if self.cat_line.is_empty() {
                    self.open_groups += delta;
                    self.push_block(line.trim_end().to_owned());
                    return;
                }
                self.flush(width);
                continue;
            }
            match split_first_sentence(trimmed) {
                Some((sentence, rest)) => {
                    self.append_fragment(sentence);
                    self.flush(width);
                    if rest.is_empty() {
                        return;
                    }
                    line = rest;
                }
                None => {
                    self.append_fragment(trimmed);
                    return;
                }
            }
        }
    }
}

fn wrap_paragraph(text: &str, width: usize) -> String {
    // Greedy wrapping on plain spaces, matching what a human editor would do
    // by hand: never break inside a word and never split at hyphens.
    let opts = WrapOptions::new(width)
        .word_separator(WordSeparator::AsciiSpace)
        .word_splitter(WordSplitter::NoHyphenation)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(false);
    textwrap::fill(text, opts)
}

/// Re-format LaTeX source text, one block per sentence
///
/// This is the pure core: total over its input, deterministic, and idempotent
/// (formatting already-formatted text is a no-op). The result has no trailing
/// newline; blocks are joined with `\n` and paragraphs are separated by a
/// single blank line.
///
/// # Example
///
/// ```rust
/// use latexfmt::formatter::format_latex;
///
/// let out = format_latex("Some text.   Another sentence.\n", 80);
/// assert_eq!(out, "Some text.\nAnother sentence.");
/// assert_eq!(format_latex(&out, 80), out);
/// ```
pub fn format_latex(input: &str, width: usize) -> String {
    let mut state = FormatterState::new();
    for line in input.lines() {
        if line.trim().is_empty() {
            log::debug!("paragraph break");
            state.flush(width);
            state.separator_pending = true;
        } else {
            state.feed(line, width);
        }
    }
    state.flush(width);
    state.blocks.join("\n")
}

/// Format LaTeX source text for file or stream output
///
/// Wraps [`format_latex`] and guarantees a trailing newline on non-empty
/// output, so that written files end properly. Empty input yields empty
/// output.
///
/// # Example
///
/// ```rust
/// use latexfmt::formatter::{FormatOptions, format_source};
///
/// let opts = FormatOptions::default();
/// assert_eq!(format_source("", &opts), "");
/// assert_eq!(format_source("Fine as is.\n", &opts), "Fine as is.\n");
/// ```
pub fn format_source(input: &str, opts: &FormatOptions) -> String {
    let mut output = format_latex(input, opts.width);
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    output
}
