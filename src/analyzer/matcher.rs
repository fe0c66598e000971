use tracing::trace;

use crate::analyzer::ConstructionSite;
use crate::resolver::TypeResolver;

pub const TARGET_TYPE_NAME: &str = "TestCase";
pub const TARGET_MODULE_SUFFIX: &str = "github.com/hashicorp/terraform/helper/resource";

/// Suffix comparison, not equality: the target type may be reached through a
/// vendored or repackaged copy of its declaring module, whose path then
/// carries an arbitrary prefix. Every path comparison in this crate goes
/// through here.
pub fn module_path_has_suffix(module_path: &str, suffix: &str) -> bool {
    module_path.ends_with(suffix)
}

/// Decides whether `site` constructs the target `TestCase` type.
///
/// Anything ambiguous degrades to a non-match: an unqualified type reference,
/// a qualifier the resolver cannot resolve, a different short name, or a
/// declaring module path without the required suffix.
pub fn is_target_construction(
    site: &ConstructionSite<'_>,
    resolver: &dyn TypeResolver,
    source: &[u8],
) -> bool {
    let type_expr = site.type_expr();
    match type_expr.kind() {
        "qualified_type" | "selector_expression" => {
            let resolved = match resolver.resolve_type(&type_expr, source) {
                Some(r) => r,
                None => return false,
            };
            if resolved.name != TARGET_TYPE_NAME {
                return false;
            }
            if !module_path_has_suffix(&resolved.module_path, TARGET_MODULE_SUFFIX) {
                return false;
            }
            trace!(module_path = %resolved.module_path, "matched target construction");
            true
        }
        _ => false,
    }
}
