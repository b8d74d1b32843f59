//! Per-language context parser adapters.
//!
//! Each adapter is a zero-sized strategy value: it names its grammar and the
//! node kinds that count as enclosing scopes there. Everything else comes
//! from the shared [`ContextParser`] defaults, so the selection logic stays
//! language-agnostic.

use super::ContextParser;
use crate::parser::Language;

/// Look up the adapter for a language.
pub fn parser_for(language: Language) -> &'static dyn ContextParser {
    match language {
        Language::Rust => &RustParser,
        Language::Python => &PythonParser,
        Language::JavaScript => &JavaScriptParser,
        Language::TypeScript => &TypeScriptParser,
        Language::Html => &HtmlParser,
        Language::Css => &CssParser,
        Language::Swift => &SwiftParser,
        Language::CSharp => &CSharpParser,
        Language::Java => &JavaParser,
        Language::Go => &GoParser,
        Language::Kotlin => &KotlinParser,
    }
}

/// Rust adapter. `impl`, trait, and type items count as scopes alongside
/// functions, since that is where Rust groups method bodies.
pub struct RustParser;

impl ContextParser for RustParser {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_item",
            "impl_item",
            "trait_item",
            "struct_item",
            "enum_item",
            "mod_item",
        ]
    }
}

/// Python adapter.
pub struct PythonParser;

impl ContextParser for PythonParser {
    fn language(&self) -> Language {
        Language::Python
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &["function_definition", "class_definition"]
    }
}

/// JavaScript adapter. Covers every function form the grammar distinguishes.
pub struct JavaScriptParser;

impl ContextParser for JavaScriptParser {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "function_expression",
            "arrow_function",
            "method_definition",
            "class_declaration",
        ]
    }
}

/// TypeScript adapter. Same function forms as JavaScript, plus interfaces.
pub struct TypeScriptParser;

impl ContextParser for TypeScriptParser {
    fn language(&self) -> Language {
        Language::TypeScript
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "function_expression",
            "arrow_function",
            "method_definition",
            "class_declaration",
            "interface_declaration",
        ]
    }
}

/// HTML adapter. Markup has no callable scopes, so only `dry_run` is
/// meaningful; context queries always report no match.
pub struct HtmlParser;

impl ContextParser for HtmlParser {
    fn language(&self) -> Language {
        Language::Html
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[]
    }
}

/// CSS adapter. Same situation as HTML.
pub struct CssParser;

impl ContextParser for CssParser {
    fn language(&self) -> Language {
        Language::Css
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Swift adapter.
pub struct SwiftParser;

impl ContextParser for SwiftParser {
    fn language(&self) -> Language {
        Language::Swift
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "class_declaration",
            "protocol_declaration",
        ]
    }
}

/// C# adapter.
pub struct CSharpParser;

impl ContextParser for CSharpParser {
    fn language(&self) -> Language {
        Language::CSharp
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "method_declaration",
            "constructor_declaration",
            "property_declaration",
            "class_declaration",
            "interface_declaration",
            "struct_declaration",
            "namespace_declaration",
        ]
    }
}

/// Java adapter.
pub struct JavaParser;

impl ContextParser for JavaParser {
    fn language(&self) -> Language {
        Language::Java
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "method_declaration",
            "constructor_declaration",
            "class_declaration",
            "interface_declaration",
            "enum_declaration",
        ]
    }
}

/// Go adapter. Type declarations stand in for classes.
pub struct GoParser;

impl ContextParser for GoParser {
    fn language(&self) -> Language {
        Language::Go
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "method_declaration",
            "type_declaration",
        ]
    }
}

/// Kotlin adapter.
pub struct KotlinParser;

impl ContextParser for KotlinParser {
    fn language(&self) -> Language {
        Language::Kotlin
    }

    fn scope_kinds(&self) -> &'static [&'static str] {
        &[
            "function_declaration",
            "class_declaration",
            "object_declaration",
        ]
    }
}
