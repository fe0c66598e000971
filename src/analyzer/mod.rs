//! The acceptance-test check itself: find every construction of
//! `resource.TestCase` in a unit and report the ones that never set
//! `CheckDestroy`.

mod checker;
mod collector;
mod matcher;

pub use checker::{check_sites, has_check_destroy_field, LINT_MESSAGE};
pub use collector::find_target_constructions;
pub use matcher::{
    is_target_construction, module_path_has_suffix, TARGET_MODULE_SUFFIX, TARGET_TYPE_NAME,
};

use std::path::Path;

use tracing::{debug, trace, warn};
use tree_sitter::{Node, Tree};

use crate::error::{AnalyzerError, Error, Result};
use crate::loader::discover_go_files;
use crate::output::Finding;
use crate::parser::{GoParser, TreeProvider};
use crate::resolver::{ImportExtractor, ImportResolver, TypeResolver};

/// One composite-literal construction expression: the type reference plus the
/// field-initializer list. A borrowed view into the unit's tree; never
/// mutated, never outlives the tree.
#[derive(Debug, Clone, Copy)]
pub struct ConstructionSite<'a> {
    node: Node<'a>,
    type_expr: Node<'a>,
}

/// A single entry of a construction's initializer list. Positional entries
/// carry no field name and are ignored by the check.
#[derive(Debug, Clone, Copy)]
pub enum FieldEntry<'a> {
    Keyed { key: Node<'a>, value: Node<'a> },
    Positional(Node<'a>),
}

impl<'a> ConstructionSite<'a> {
    pub fn from_node(node: Node<'a>) -> Option<Self> {
        if node.kind() != "composite_literal" {
            return None;
        }
        let type_expr = node.child_by_field_name("type")?;
        Some(Self { node, type_expr })
    }

    pub fn node(&self) -> Node<'a> {
        self.node
    }

    /// The type reference, used both for type resolution and for positioning
    /// the report.
    pub fn type_expr(&self) -> Node<'a> {
        self.type_expr
    }

    /// The field-initializer entries, in source order.
    pub fn entries(&self) -> Vec<FieldEntry<'a>> {
        let body = match self
            .node
            .child_by_field_name("body")
            .or_else(|| self.find_literal_body())
        {
            Some(b) => b,
            None => return Vec::new(),
        };

        let mut entries = Vec::new();
        let mut cursor = body.walk();
        for child in body.children(&mut cursor) {
            match child.kind() {
                "keyed_element" => {
                    let key = child.child_by_field_name("key").or_else(|| child.child(0));
                    let value = child.child_by_field_name("value").or_else(|| {
                        let mut c = child.walk();
                        child.children(&mut c).last()
                    });
                    if let (Some(key), Some(value)) = (key, value) {
                        entries.push(FieldEntry::Keyed {
                            key: unwrap_literal_element(key),
                            value: unwrap_literal_element(value),
                        });
                    }
                }
                "literal_element" => entries.push(FieldEntry::Positional(child)),
                _ => {}
            }
        }
        entries
    }

    fn find_literal_body(&self) -> Option<Node<'a>> {
        let mut cursor = self.node.walk();
        let body = self
            .node
            .children(&mut cursor)
            .find(|child| child.kind() == "literal_value");
        body
    }
}

// Go wraps both keys and values of keyed elements in literal_element nodes.
fn unwrap_literal_element(node: Node<'_>) -> Node<'_> {
    if node.kind() == "literal_element" {
        if let Some(child) = node.child(0) {
            return child;
        }
    }
    node
}

/// Result of checking a file tree: how many units were scanned, how many were
/// skipped as unreadable or unparseable, and the findings in document order.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub findings: Vec<Finding>,
}

pub struct Analyzer {
    parser: GoParser,
    imports: ImportExtractor,
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            parser: GoParser::new(),
            imports: ImportExtractor::new(),
        }
    }

    /// Checks one already-parsed unit, resolving types through its import
    /// table.
    pub fn check_unit(
        &self,
        tree: &Tree,
        source: &str,
        file_path: &str,
    ) -> std::result::Result<Vec<Finding>, AnalyzerError> {
        let resolver = ImportResolver::new(self.imports.extract(tree, source));
        self.check_with_resolver(tree, source, file_path, &resolver)
    }

    /// Checks one already-parsed unit with an injected resolver.
    pub fn check_with_resolver(
        &self,
        tree: &Tree,
        source: &str,
        file_path: &str,
        resolver: &dyn TypeResolver,
    ) -> std::result::Result<Vec<Finding>, AnalyzerError> {
        trace!(file_path, "checking unit");
        let sites = find_target_constructions(tree, resolver, source.as_bytes());
        debug!(file_path, sites = sites.len(), "collected target constructions");
        check_sites(&sites, source.as_bytes(), file_path)
    }

    /// Parses and checks one unit's source.
    pub fn check_source(&self, source: &str, file_path: &str) -> Result<Vec<Finding>> {
        let tree = self.parser.parse(source, file_path)?;
        Ok(self.check_unit(&tree, source, file_path)?)
    }

    /// Discovers Go files under `root` and checks each in turn. Unreadable or
    /// unparseable files are skipped with a warning; analyzer errors abort the
    /// run.
    pub fn check_path(&self, root: &Path) -> Result<CheckReport> {
        let files = discover_go_files(root)?;
        let mut report = CheckReport::default();

        for file in &files {
            let source = match std::fs::read_to_string(file) {
                Ok(s) => s,
                Err(e) => {
                    warn!(file = %file.display(), error = %e, "skipping unreadable file");
                    report.files_skipped += 1;
                    continue;
                }
            };
            let path_str = file.to_string_lossy();
            match self.check_source(&source, &path_str) {
                Ok(findings) => {
                    report.files_scanned += 1;
                    report.findings.extend(findings);
                }
                Err(Error::Parser(e)) => {
                    warn!(file = %path_str, error = %e, "skipping unparseable file");
                    report.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        debug!(
            files_scanned = report.files_scanned,
            files_skipped = report.files_skipped,
            findings = report.findings.len(),
            "check complete"
        );
        Ok(report)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TARGET_IMPORT: &str = "github.com/hashicorp/terraform/helper/resource";

    fn check(source: &str) -> Vec<Finding> {
        Analyzer::new().check_source(source, "test.go").unwrap()
    }

    #[test]
    fn test_testcase_with_check_destroy_passes() {
        let source = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccThing(t *testing.T) {{
    resource.Test(t, resource.TestCase{{
        CheckDestroy: testAccCheckThingDestroy,
        Steps:        []resource.TestStep{{}},
    }})
}}
"#
        );
        assert_eq!(check(&source), vec![]);
    }

    #[test]
    fn test_testcase_without_check_destroy_reported() {
        let source = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccThing(t *testing.T) {{
    resource.Test(t, resource.TestCase{{
        Steps: []resource.TestStep{{}},
    }})
}}
"#
        );
        let findings = check(&source);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, LINT_MESSAGE);
        assert_eq!(findings[0].file, "test.go");
    }

    #[test]
    fn test_unrelated_package_not_reported() {
        let source = r#"package main

import "example.com/other"

func TestAccThing(t *testing.T) {
    _ = other.TestCase{
        Steps: nil,
    }
}
"#;
        assert_eq!(check(source), vec![]);
    }

    #[test]
    fn test_other_type_with_matching_field_not_reported() {
        let source = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccThing(t *testing.T) {{
    _ = resource.OtherType{{
        CheckDestroy: nil,
    }}
}}
"#
        );
        assert_eq!(check(&source), vec![]);
    }

    #[test]
    fn test_idempotent_over_identical_input() {
        let source = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccThing(t *testing.T) {{
    _ = resource.TestCase{{}}
    _ = resource.TestCase{{Steps: nil}}
}}
"#
        );
        let first = check(&source);
        let second = check(&source);
        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_check_path_over_directory() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let bad = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccBad(t *testing.T) {{
    _ = resource.TestCase{{Steps: nil}}
}}
"#
        );
        let good = format!(
            r#"package main

import "{TARGET_IMPORT}"

func TestAccGood(t *testing.T) {{
    _ = resource.TestCase{{CheckDestroy: f}}
}}
"#
        );
        fs::write(temp_dir.path().join("bad_test.go"), &bad).unwrap();
        fs::write(temp_dir.path().join("good_test.go"), &good).unwrap();

        let report = Analyzer::new().check_path(temp_dir.path()).unwrap();
        assert_eq!(report.files_scanned, 2);
        assert_eq!(report.files_skipped, 0);
        assert_eq!(report.findings.len(), 1);
        assert!(report.findings[0].file.ends_with("bad_test.go"));
    }

    #[test]
    fn test_entries_of_empty_literal() {
        let source = r#"package main

func f() {
    _ = pkg.Thing{}
}
"#;
        let analyzer = Analyzer::new();
        let tree = analyzer.parser.parse(source, "test.go").unwrap();

        fn find_site<'a>(node: Node<'a>) -> Option<ConstructionSite<'a>> {
            if let Some(site) = ConstructionSite::from_node(node) {
                return Some(site);
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if let Some(found) = find_site(child) {
                    return Some(found);
                }
            }
            None
        }

        let site = find_site(tree.root_node()).unwrap();
        assert!(site.entries().is_empty());
        // The fallback body lookup agrees with the field-name lookup.
        assert_eq!(
            site.find_literal_body().map(|n| n.id()),
            site.node().child_by_field_name("body").map(|n| n.id())
        );
    }

    #[test]
    fn test_entries_classify_positional_and_keyed() {
        let source = r#"package main

func f() {
    _ = pkg.Thing{a, B: c}
}
"#;
        let analyzer = Analyzer::new();
        let tree = analyzer.parser.parse(source, "test.go").unwrap();

        fn find_site<'a>(node: Node<'a>) -> Option<ConstructionSite<'a>> {
            if let Some(site) = ConstructionSite::from_node(node) {
                return Some(site);
            }
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                if let Some(found) = find_site(child) {
                    return Some(found);
                }
            }
            None
        }

        let site = find_site(tree.root_node()).unwrap();
        let entries = site.entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(entries[0], FieldEntry::Positional(_)));
        assert!(matches!(entries[1], FieldEntry::Keyed { .. }));
    }
}
