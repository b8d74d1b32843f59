use eyre::{bail, Result};
use std::path::Path;
use tree_sitter::{Node, Parser, Tree};

/// Languages this crate links a tree-sitter grammar for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Rust (.rs)
    Rust,
    /// Python (.py)
    Python,
    /// JavaScript (.js, .mjs, .cjs)
    JavaScript,
    /// TypeScript (.ts, .tsx)
    TypeScript,
    /// HTML markup (.html, .htm)
    Html,
    /// CSS stylesheets (.css)
    Css,
    /// Swift (.swift)
    Swift,
    /// C# (.cs)
    CSharp,
    /// Java (.java)
    Java,
    /// Go (.go)
    Go,
    /// Kotlin (.kt, .kts)
    Kotlin,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 11] = [
        Language::Rust,
        Language::Python,
        Language::JavaScript,
        Language::TypeScript,
        Language::Html,
        Language::Css,
        Language::Swift,
        Language::CSharp,
        Language::Java,
        Language::Go,
        Language::Kotlin,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Rust => "Rust",
            Language::Python => "Python",
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Swift => "Swift",
            Language::CSharp => "C#",
            Language::Java => "Java",
            Language::Go => "Go",
            Language::Kotlin => "Kotlin",
        }
    }

    /// Map a lowercase file extension to a language.
    ///
    /// Returns `None` for extensions no linked grammar handles.
    pub fn from_extension(extension: &str) -> Option<Language> {
        match extension {
            "rs" => Some(Language::Rust),
            "py" => Some(Language::Python),
            "js" | "mjs" | "cjs" => Some(Language::JavaScript),
            "ts" | "tsx" => Some(Language::TypeScript),
            "html" | "htm" => Some(Language::Html),
            "css" => Some(Language::Css),
            "swift" => Some(Language::Swift),
            "cs" => Some(Language::CSharp),
            "java" => Some(Language::Java),
            "go" => Some(Language::Go),
            "kt" | "kts" => Some(Language::Kotlin),
            _ => None,
        }
    }

    /// The tree-sitter grammar backing this language.
    pub fn grammar(&self) -> tree_sitter::Language {
        match self {
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            Language::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            Language::Html => tree_sitter_html::LANGUAGE.into(),
            Language::Css => tree_sitter_css::LANGUAGE.into(),
            Language::Swift => tree_sitter_swift::LANGUAGE.into(),
            Language::CSharp => tree_sitter_c_sharp::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
            Language::Go => tree_sitter_go::LANGUAGE.into(),
            Language::Kotlin => tree_sitter_kotlin_ng::LANGUAGE.into(),
        }
    }
}

/// Detect the language of a file from its extension, case-insensitively.
///
/// # Errors
/// Returns an error if the path has no extension or the extension is not
/// supported.
///
/// # Examples
/// ```
/// use treesitter_scope::parser::{detect_language, Language};
///
/// assert_eq!(detect_language("src/main.rs").unwrap(), Language::Rust);
/// assert_eq!(detect_language("review.PY").unwrap(), Language::Python);
/// assert!(detect_language("notes.txt").is_err());
/// assert!(detect_language("Makefile").is_err());
/// ```
pub fn detect_language(path: impl AsRef<Path>) -> Result<Language> {
    let path = path.as_ref();

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase());

    match extension.as_deref() {
        Some(ext) => Language::from_extension(ext)
            .ok_or_else(|| eyre::eyre!("Unsupported file extension: .{}", ext)),
        None => {
            bail!("No file extension found in path: {}", path.display())
        }
    }
}

/// Parse source code into a tree-sitter syntax tree.
///
/// Even invalid syntax produces a tree; the offending regions are marked
/// with error nodes. Use [`first_syntax_error`] to turn those into a
/// report.
///
/// # Errors
/// Returns an error if the parser cannot be configured for the language or
/// gives up entirely (very rare).
///
/// # Examples
/// ```
/// use treesitter_scope::parser::{parse_code, Language};
///
/// let tree = parse_code("fn main() {}", Language::Rust).unwrap();
/// assert_eq!(tree.root_node().kind(), "source_file");
/// assert!(!tree.root_node().has_error());
/// ```
pub fn parse_code(source: &str, language: Language) -> Result<Tree> {
    log::debug!("Parsing {} code ({} bytes)", language.name(), source.len());

    let mut parser = Parser::new();
    parser.set_language(&language.grammar())?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| eyre::eyre!("Failed to parse {} code", language.name()))?;

    if tree.root_node().has_error() {
        log::warn!("Parse tree contains syntax errors");
    }

    Ok(tree)
}

/// Report the first syntax error in a parsed tree, or `None` for a clean
/// parse.
///
/// The report carries the 1-indexed line and column of the first error or
/// missing node in pre-order, which is the position a person would fix
/// first.
pub fn first_syntax_error(tree: &Tree) -> Option<String> {
    let root = tree.root_node();
    if !root.has_error() {
        return None;
    }

    match first_error_node(root) {
        Some(node) if node.is_missing() => {
            let pos = node.start_position();
            Some(format!(
                "missing {} at line {}, column {}",
                node.kind(),
                pos.row + 1,
                pos.column + 1
            ))
        }
        Some(node) => {
            let pos = node.start_position();
            Some(format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            ))
        }
        None => Some("syntax error".to_string()),
    }
}

/// Depth-first search for the first error or missing node.
fn first_error_node(node: Node) -> Option<Node> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error_node(child) {
            return Some(found);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_parse_has_no_error_report() {
        let tree = parse_code("def f():\n    pass\n", Language::Python).unwrap();
        assert_eq!(first_syntax_error(&tree), None);
    }

    #[test]
    fn error_report_names_a_position() {
        let tree = parse_code("def f(:\n    pass\n", Language::Python).unwrap();
        let report = first_syntax_error(&tree).expect("broken source should report");
        assert!(
            report.contains("line"),
            "report should carry a position, got: {report}"
        );
    }

    #[test]
    fn every_language_has_a_loadable_grammar() {
        for language in Language::ALL {
            let mut parser = Parser::new();
            assert!(
                parser.set_language(&language.grammar()).is_ok(),
                "grammar for {} failed to load",
                language.name()
            );
        }
    }
}
