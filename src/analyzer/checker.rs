use tree_sitter::Node;

use crate::analyzer::{ConstructionSite, FieldEntry};
use crate::error::AnalyzerError;
use crate::output::Finding;

pub const LINT_MESSAGE: &str = "missing CheckDestroy";

const CHECK_DESTROY_FIELD: &str = "CheckDestroy";

/// True when the site names a `CheckDestroy` field. Only keyed entries with an
/// identifier key count; positional entries and anything malformed are skipped
/// uniformly. The first hit suffices - presence is what matters, not
/// uniqueness.
pub fn has_check_destroy_field(site: &ConstructionSite<'_>, source: &[u8]) -> bool {
    for entry in site.entries() {
        match entry {
            FieldEntry::Keyed { key, .. } => {
                if matches!(key.kind(), "identifier" | "field_identifier")
                    && key.utf8_text(source) == Ok(CHECK_DESTROY_FIELD)
                {
                    return true;
                }
            }
            FieldEntry::Positional(_) => {}
        }
    }
    false
}

/// Emits one finding per site lacking the field, positioned at the type-name
/// token of the construction's type reference.
pub fn check_sites(
    sites: &[ConstructionSite<'_>],
    source: &[u8],
    file_path: &str,
) -> Result<Vec<Finding>, AnalyzerError> {
    let mut findings = Vec::new();
    for site in sites {
        if has_check_destroy_field(site, source) {
            continue;
        }
        let token = type_name_token(site.type_expr())?;
        let start = token.start_position();
        findings.push(Finding {
            file: file_path.to_string(),
            line: start.row + 1,
            column: start.column + 1,
            message: LINT_MESSAGE.to_string(),
        });
    }
    Ok(findings)
}

/// The rightmost component of a qualified type reference - the token the
/// report points at. The matcher only admits qualified references, so any
/// other shape here is a contract breach, surfaced as a fatal error.
fn type_name_token(type_expr: Node<'_>) -> Result<Node<'_>, AnalyzerError> {
    match type_expr.kind() {
        "qualified_type" | "selector_expression" => type_expr
            .child_by_field_name("name")
            .or_else(|| type_expr.child_by_field_name("field"))
            .ok_or_else(|| AnalyzerError::unexpected_node_kind("type name token", type_expr.kind())),
        other => Err(AnalyzerError::unexpected_node_kind("qualified_type", other)),
    }
}
