use tree_sitter::{Node, Tree};

use crate::analyzer::matcher::is_target_construction;
use crate::analyzer::ConstructionSite;
use crate::resolver::TypeResolver;

/// Collects every construction of the target type in one pre-order traversal.
///
/// The traversal is structurally filtered to composite-literal nodes; the
/// result keeps document order, which is what makes report ordering
/// reproducible.
pub fn find_target_constructions<'a>(
    tree: &'a Tree,
    resolver: &dyn TypeResolver,
    source: &'a [u8],
) -> Vec<ConstructionSite<'a>> {
    let mut sites = Vec::new();
    collect(tree.root_node(), resolver, source, &mut sites);
    sites
}

fn collect<'a>(
    node: Node<'a>,
    resolver: &dyn TypeResolver,
    source: &'a [u8],
    sites: &mut Vec<ConstructionSite<'a>>,
) {
    if node.kind() == "composite_literal" {
        if let Some(site) = ConstructionSite::from_node(node) {
            if is_target_construction(&site, resolver, source) {
                sites.push(site);
            }
        }
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, resolver, source, sites);
    }
}
