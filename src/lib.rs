//! Enclosing-scope lookup over tree-sitter syntax trees.
//!
//! Given a byte range in a source file, find the widest function or class
//! definition that fully contains it, and check whether a source file parses
//! cleanly. One adapter per supported language implements the same
//! [`context::ContextParser`] contract, so callers can treat every language
//! parser interchangeably.
//!
//! ```
//! use treesitter_scope::{parser_for, ContextParser, Language};
//!
//! let source = "class A:\n    def f(self):\n        pass\n";
//! let parser = parser_for(Language::Python);
//!
//! // The widest qualifying scope wins: the range inside the method
//! // resolves to the class, not the method.
//! let start = source.find("pass").unwrap();
//! let found = parser
//!     .find_enclosing_context(source, start, start + "pass".len())
//!     .unwrap();
//! assert_eq!(found.context.unwrap().kind, "class_definition");
//!
//! let check = parser.dry_run(source);
//! assert!(check.valid);
//! ```

pub mod context;
pub mod parser;
pub mod tree;

pub use context::{parser_for, parser_for_path, ContextParser, DryRunResult, EnclosingContext};
pub use parser::Language;
pub use tree::SyntaxNode;
