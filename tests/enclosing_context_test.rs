//! Enclosing-context selection behavior.
//!
//! The finder returns the *widest* function/class definition whose span
//! fully contains the query range. The nested-scope cases pin that down
//! explicitly, since "outer class beats inner method" is easy to get
//! backwards.

mod common;

use treesitter_scope::{parser_for, ContextParser, Language};

// ============================================================================
// Single scope
// ============================================================================

#[test]
fn test_range_inside_top_level_function_returns_it() {
    common::init_logging();

    let source = "def greet(name):\n    return name\n";
    let (start, end) = common::offsets_of(source, "return name");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    let node = found.context.expect("range is inside the function body");
    assert_eq!(node.kind, "function_definition");
    assert_eq!(node.start, 0);
}

#[test]
fn test_range_outside_any_scope_returns_none() {
    let source = "x = 1\n\ndef f():\n    pass\n";
    let (start, end) = common::offsets_of(source, "x = 1");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    assert!(
        found.context.is_none(),
        "module-level assignment has no enclosing function or class"
    );
}

#[test]
fn test_range_crossing_a_scope_boundary_returns_none() {
    // Range starts inside the function body but runs past its end.
    let source = "def f():\n    pass\n\nx = 1\n";
    let start = source.find("pass").unwrap();
    let end = source.find("x = 1").unwrap() + 2;

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    assert!(
        found.context.is_none(),
        "intersection without full containment must not match"
    );
}

// ============================================================================
// Nested scopes: the widest span wins
// ============================================================================

#[test]
fn test_method_range_resolves_to_outer_class_not_method() {
    // The concrete scenario from the host application: a class wrapping a
    // method. Both definitions contain the `pass` statement; the class has
    // the larger span and must win.
    let source = "class A:\n    def f(self):\n        pass\n";
    let (start, end) = common::offsets_of(source, "pass");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    let node = found.context.expect("pass statement is inside the class");
    assert_eq!(node.kind, "class_definition");
    assert_eq!(node.start, 0);
    assert_eq!(
        node.end,
        source.trim_end().len(),
        "class should span the whole text"
    );
}

#[test]
fn test_doubly_nested_function_still_resolves_to_outermost_class() {
    let source = concat!(
        "class Outer:\n",
        "    def method(self):\n",
        "        def helper():\n",
        "            return 42\n",
        "        return helper()\n",
    );
    let (start, end) = common::offsets_of(source, "return 42");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    let node = found.context.unwrap();
    assert_eq!(node.kind, "class_definition");
    assert_eq!(node.start, 0);
}

#[test]
fn test_sibling_function_does_not_shadow_the_right_one() {
    let source = "def first():\n    return 1\n\ndef second():\n    return 2\n";
    let (start, end) = common::offsets_of(source, "return 2");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    let node = found.context.unwrap();
    assert_eq!(node.kind, "function_definition");
    assert!(
        node.start > 0,
        "the second function starts after the first; got span [{}, {}]",
        node.start,
        node.end
    );
}

// ============================================================================
// Literal range handling
// ============================================================================

#[test]
fn test_zero_width_range_inside_function_matches() {
    let source = "def f():\n    pass\n";
    let (start, _) = common::offsets_of(source, "pass");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, start)
        .unwrap();

    assert_eq!(found.context.unwrap().kind, "function_definition");
}

#[test]
fn test_inverted_range_is_compared_literally() {
    // Bounds are not validated: start > end still satisfies the containment
    // inequalities when both offsets sit inside the function span.
    let source = "def f():\n    a = 1\n    b = 2\n";
    let (b_start, _) = common::offsets_of(source, "b = 2");
    let (a_start, _) = common::offsets_of(source, "a = 1");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, b_start, a_start)
        .unwrap();

    assert_eq!(found.context.unwrap().kind, "function_definition");
}

#[test]
fn test_range_past_end_of_source_returns_none() {
    let source = "def f():\n    pass\n";

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, source.len() + 10, source.len() + 20)
        .unwrap();

    assert!(found.context.is_none());
}

// ============================================================================
// Statelessness
// ============================================================================

#[test]
fn test_repeated_queries_return_identical_results() {
    let source = "class A:\n    def f(self):\n        pass\n";
    let (start, end) = common::offsets_of(source, "pass");
    let parser = parser_for(Language::Python);

    let first = parser.find_enclosing_context(source, start, end).unwrap();
    let second = parser.find_enclosing_context(source, start, end).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_result_serializes_for_the_host_application() {
    let source = "def f():\n    pass\n";
    let (start, end) = common::offsets_of(source, "pass");

    let found = parser_for(Language::Python)
        .find_enclosing_context(source, start, end)
        .unwrap();

    let json = serde_json::to_value(&found).unwrap();
    assert_eq!(json["context"]["kind"], "function_definition");
    assert!(json["context"]["start"].is_u64());
    assert!(json["context"]["end"].is_u64());
}
