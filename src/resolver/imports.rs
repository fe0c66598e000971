use std::collections::HashMap;

use tracing::{trace, warn};
use tree_sitter::{Language, Query, QueryCursor, StreamingIterator, Tree};

use crate::utils::{extract_last_segment, unquote_string};

/// Package qualifier -> import path for one compilation unit.
#[derive(Debug, Clone, Default)]
pub struct ImportMap {
    imports: HashMap<String, String>,
}

impl ImportMap {
    pub fn new() -> Self {
        Self {
            imports: HashMap::new(),
        }
    }

    pub fn insert(&mut self, short_name: String, full_path: String) {
        self.imports.insert(short_name, full_path);
    }

    pub fn get(&self, short_name: &str) -> Option<&String> {
        self.imports.get(short_name)
    }

    pub fn resolve(&self, package: &str) -> Option<String> {
        self.imports.get(package).cloned()
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}

/// Matches plain and aliased import specs. Go allows the import path to be
/// either an interpreted or a raw string literal.
const IMPORTS_QUERY: &str = r#"
[
  (import_spec
    [(interpreted_string_literal) (raw_string_literal)] @path)
  (import_spec
    (package_identifier) @alias
    [(interpreted_string_literal) (raw_string_literal)] @path)
]
"#;

/// Builds an [`ImportMap`] from a unit's import declarations, via a compiled
/// Tree-sitter query.
pub struct ImportExtractor {
    query: Option<Query>,
}

impl ImportExtractor {
    pub fn new() -> Self {
        let lang: Language = tree_sitter_go::LANGUAGE.into();
        let query = match Query::new(&lang, IMPORTS_QUERY) {
            Ok(q) => Some(q),
            Err(e) => {
                warn!(error = %e, "failed to compile imports query");
                None
            }
        };
        Self { query }
    }

    pub fn extract(&self, tree: &Tree, source: &str) -> ImportMap {
        let mut imports = ImportMap::new();
        let query = match &self.query {
            Some(q) => q,
            None => return imports,
        };

        let mut cursor = QueryCursor::new();
        let mut matches = cursor.matches(query, tree.root_node(), source.as_bytes());

        while let Some(m) = matches.next() {
            let mut path: Option<String> = None;
            let mut alias: Option<String> = None;

            for capture in m.captures {
                let name = query.capture_names()[capture.index as usize];
                let text = capture.node.utf8_text(source.as_bytes()).unwrap_or("");
                match name {
                    "path" => path = Some(unquote_string(text)),
                    "alias" => alias = Some(text.to_string()),
                    _ => {}
                }
            }

            if let Some(p) = path {
                let short_name = alias.unwrap_or_else(|| extract_last_segment(&p));
                imports.insert(short_name, p);
            }
        }

        trace!(import_count = imports.len(), "extracted imports");
        imports
    }
}

impl Default for ImportExtractor {
    fn default() -> Self {
        Self::new()
    }
}
