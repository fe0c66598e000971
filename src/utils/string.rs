pub fn unquote_string(s: &str) -> String {
    let s = s.trim();
    if (s.starts_with('"') && s.ends_with('"')) || (s.starts_with('`') && s.ends_with('`')) {
        s[1..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Default package qualifier for an import path is its last segment,
/// e.g. `github.com/hashicorp/terraform/helper/resource` -> `resource`.
pub fn extract_last_segment(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}
