//! Enclosing-context queries over normalized syntax trees.
//!
//! One adapter per supported language implements [`ContextParser`]. The host
//! application picks an adapter by file type ([`parser_for_path`]) and treats
//! every language the same way: ask which function or class definition
//! encloses a byte range, or check that a file parses at all.

mod finder;
pub mod languages;

use crate::parser::{detect_language, first_syntax_error, parse_code, Language};
use crate::tree::SyntaxNode;
use eyre::{bail, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub use languages::parser_for;

/// Result of an enclosing-context query.
///
/// Holds the chosen scope, or `None` when no function/class definition fully
/// contains the query range. The node is cloned out of the per-query tree,
/// so identity is not stable across reparses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingContext {
    /// The widest qualifying definition, if any.
    pub context: Option<SyntaxNode>,
}

/// Outcome of a parse-validity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DryRunResult {
    /// Whether the source parsed without error.
    pub valid: bool,
    /// Empty when valid, otherwise the parser's report.
    pub error: String,
}

/// Capability contract shared by every language adapter.
///
/// Adapters are zero-sized and stateless; each call parses its own input
/// from scratch, so concurrent use from independent call sites needs no
/// coordination.
pub trait ContextParser: Send + Sync {
    /// Language this adapter parses.
    fn language(&self) -> Language;

    /// Node kinds that count as enclosing scopes in this grammar.
    fn scope_kinds(&self) -> &'static [&'static str];

    /// Find the widest function/class definition whose span fully contains
    /// `[range_start, range_end]`, given as byte offsets into `source`.
    ///
    /// The bounds are compared against node spans exactly as supplied;
    /// callers holding 1-indexed line numbers convert first, e.g. via
    /// [`line_range_to_byte_range`]. Nested qualifying scopes lose to their
    /// ancestors: a range inside a method resolves to the surrounding class.
    ///
    /// # Errors
    /// Fails on unparseable input. Callers are expected to have validated
    /// the source with [`ContextParser::dry_run`] first.
    fn find_enclosing_context(
        &self,
        source: &str,
        range_start: usize,
        range_end: usize,
    ) -> Result<EnclosingContext> {
        let tree = parse_code(source, self.language())?;
        if let Some(report) = first_syntax_error(&tree) {
            bail!("{} source does not parse: {report}", self.language().name());
        }

        log::debug!(
            "Locating enclosing context for bytes {range_start}..{range_end} in {} source",
            self.language().name()
        );

        let root = SyntaxNode::from_tree(&tree);
        let context =
            finder::largest_enclosing(&root, self.scope_kinds(), range_start, range_end).cloned();

        Ok(EnclosingContext { context })
    }

    /// Check whether `source` parses without error.
    ///
    /// Never fails and never panics; converting parse failure into data is
    /// this operation's whole job.
    fn dry_run(&self, source: &str) -> DryRunResult {
        match parse_code(source, self.language()) {
            Ok(tree) => match first_syntax_error(&tree) {
                None => DryRunResult {
                    valid: true,
                    error: String::new(),
                },
                Some(report) => DryRunResult {
                    valid: false,
                    error: report,
                },
            },
            Err(err) => DryRunResult {
                valid: false,
                error: err.to_string(),
            },
        }
    }
}

/// Look up the adapter for a file path by its extension.
///
/// # Errors
/// Returns an error if the path has no extension or the extension is not
/// supported.
///
/// # Examples
/// ```
/// use treesitter_scope::context::{parser_for_path, ContextParser};
/// use treesitter_scope::parser::Language;
///
/// let parser = parser_for_path("src/review.py").unwrap();
/// assert_eq!(parser.language(), Language::Python);
/// ```
pub fn parser_for_path(path: impl AsRef<Path>) -> Result<&'static dyn ContextParser> {
    Ok(parser_for(detect_language(path)?))
}

/// Convert a 1-indexed, inclusive line range into the byte span covering
/// those lines (trailing newline excluded).
///
/// Returns `None` when the line range is zero, inverted, or past the end of
/// the source.
pub fn line_range_to_byte_range(
    source: &str,
    line_start: u32,
    line_end: u32,
) -> Option<(usize, usize)> {
    if line_start == 0 || line_end < line_start {
        return None;
    }

    let mut line_spans = Vec::new();
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let content = line.trim_end_matches('\n').trim_end_matches('\r');
        line_spans.push((offset, offset + content.len()));
        offset += line.len();
    }

    let (start, _) = *line_spans.get(line_start as usize - 1)?;
    let (_, end) = *line_spans.get(line_end as usize - 1)?;
    Some((start, end))
}
