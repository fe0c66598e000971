mod imports;

pub use imports::{ImportExtractor, ImportMap};

use tree_sitter::Node;

/// A declared named type: its short name plus the path of the module that
/// declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub name: String,
    pub module_path: String,
}

/// Maps a type-reference expression to its declared type, when statically
/// determinable. `None` means unresolved, which downstream consumers must
/// treat as a non-match.
pub trait TypeResolver {
    fn resolve_type(&self, type_expr: &Node<'_>, source: &[u8]) -> Option<ResolvedType>;
}

/// Resolves package-qualified type references through the unit's import table.
///
/// This stands in for full type checking: the qualifier of `pkg.Type` is
/// looked up among the unit's imports, and the import path becomes the
/// declaring module path. A qualifier that was never imported resolves to
/// nothing.
pub struct ImportResolver {
    imports: ImportMap,
}

impl ImportResolver {
    pub fn new(imports: ImportMap) -> Self {
        Self { imports }
    }
}

impl TypeResolver for ImportResolver {
    fn resolve_type(&self, type_expr: &Node<'_>, source: &[u8]) -> Option<ResolvedType> {
        match type_expr.kind() {
            // Go: qualified_type in type position, selector_expression when the
            // grammar parses the reference as an expression.
            "qualified_type" | "selector_expression" => {
                let qualifier = type_expr
                    .child_by_field_name("package")
                    .or_else(|| type_expr.child_by_field_name("operand"))?;
                let name = type_expr
                    .child_by_field_name("name")
                    .or_else(|| type_expr.child_by_field_name("field"))?;

                let qualifier = qualifier.utf8_text(source).ok()?;
                let module_path = self.imports.resolve(qualifier)?;
                Some(ResolvedType {
                    name: name.utf8_text(source).ok()?.to_string(),
                    module_path,
                })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{GoParser, TreeProvider};
    use pretty_assertions::assert_eq;
    use tree_sitter::Tree;

    fn parse(source: &str) -> Tree {
        GoParser::new().parse(source, "test.go").unwrap()
    }

    fn find_composite_type<'a>(node: Node<'a>) -> Option<Node<'a>> {
        if node.kind() == "composite_literal" {
            return node.child_by_field_name("type");
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if let Some(found) = find_composite_type(child) {
                return Some(found);
            }
        }
        None
    }

    #[test]
    fn test_resolve_qualified_type() {
        let source = r#"package main

func f() {
    _ = resource.TestCase{}
}
"#;
        let tree = parse(source);
        let type_expr = find_composite_type(tree.root_node()).unwrap();

        let mut imports = ImportMap::new();
        imports.insert(
            "resource".to_string(),
            "github.com/hashicorp/terraform/helper/resource".to_string(),
        );
        let resolver = ImportResolver::new(imports);

        let resolved = resolver
            .resolve_type(&type_expr, source.as_bytes())
            .unwrap();
        assert_eq!(resolved.name, "TestCase");
        assert_eq!(
            resolved.module_path,
            "github.com/hashicorp/terraform/helper/resource"
        );
    }

    #[test]
    fn test_unimported_qualifier_is_unresolved() {
        let source = r#"package main

func f() {
    _ = resource.TestCase{}
}
"#;
        let tree = parse(source);
        let type_expr = find_composite_type(tree.root_node()).unwrap();

        let resolver = ImportResolver::new(ImportMap::new());
        assert_eq!(resolver.resolve_type(&type_expr, source.as_bytes()), None);
    }

    #[test]
    fn test_unqualified_type_is_unresolved() {
        let source = r#"package main

func f() {
    _ = TestCase{}
}
"#;
        let tree = parse(source);
        let type_expr = find_composite_type(tree.root_node()).unwrap();

        let mut imports = ImportMap::new();
        imports.insert("resource".to_string(), "whatever".to_string());
        let resolver = ImportResolver::new(imports);
        assert_eq!(resolver.resolve_type(&type_expr, source.as_bytes()), None);
    }
}
