//! Largest-span scope selection.

use crate::tree::SyntaxNode;

/// Select the widest node whose kind is in `scope_kinds` and whose span
/// fully contains `[range_start, range_end]`.
///
/// Every node is visited in pre-order, including descendants of a match, and
/// only a strictly larger span replaces the best so far. Nested qualifying
/// scopes therefore lose to their ancestors (the outermost scope wins) and
/// ties keep the earliest node in traversal order. The range is compared
/// literally; zero-width and inverted ranges are not rejected up front.
pub(crate) fn largest_enclosing<'t>(
    root: &'t SyntaxNode,
    scope_kinds: &[&str],
    range_start: usize,
    range_end: usize,
) -> Option<&'t SyntaxNode> {
    fold(root, scope_kinds, range_start, range_end, (None, 0)).0
}

type Best<'t> = (Option<&'t SyntaxNode>, usize);

fn fold<'t>(
    node: &'t SyntaxNode,
    scope_kinds: &[&str],
    range_start: usize,
    range_end: usize,
    best: Best<'t>,
) -> Best<'t> {
    let best = if scope_kinds.contains(&node.kind.as_str())
        && node.contains(range_start, range_end)
        && node.size() > best.1
    {
        (Some(node), node.size())
    } else {
        best
    };

    node.children.iter().fold(best, |acc, child| {
        fold(child, scope_kinds, range_start, range_end, acc)
    })
}
