use tree_sitter::Tree;

use crate::error::ParserError;

/// Supplies the parsed structural tree for one compilation unit.
///
/// The analyzer only ever reads the tree, so anything able to produce a
/// Tree-sitter `Tree` (a real parser, a test harness with canned source) can
/// stand in.
pub trait TreeProvider {
    fn parse(&self, source: &str, file_path: &str) -> Result<Tree, ParserError>;
}

/// Tree-sitter parser for Go compilation units.
pub struct GoParser;

impl GoParser {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GoParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeProvider for GoParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<Tree, ParserError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|_| ParserError::language_setup_failed("go"))?;
        parser
            .parse(source, None)
            .ok_or_else(|| ParserError::parse_failed(file_path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_source() {
        let source = r#"package main

func main() {}
"#;
        let tree = GoParser::new().parse(source, "main.go").unwrap();
        assert_eq!(tree.root_node().kind(), "source_file");
        assert!(!tree.root_node().has_error());
    }

    #[test]
    fn test_parse_tolerates_syntax_errors() {
        // Tree-sitter produces a tree with error nodes rather than failing.
        let tree = GoParser::new().parse("package main func {", "broken.go").unwrap();
        assert!(tree.root_node().has_error());
    }
}
