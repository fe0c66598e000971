use serde::Serialize;

/// One lint result: a source position plus the fixed message. The position
/// points at the type-name token of the offending construction, which is the
/// most actionable caret location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub file: String,
    /// 1-based.
    pub line: usize,
    /// 1-based.
    pub column: usize,
    pub message: String,
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {}",
            self.file, self.line, self.column, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_display() {
        let finding = Finding {
            file: "thing_test.go".to_string(),
            line: 14,
            column: 27,
            message: "missing CheckDestroy".to_string(),
        };
        assert_eq!(
            finding.to_string(),
            "thing_test.go:14:27: missing CheckDestroy"
        );
    }
}
