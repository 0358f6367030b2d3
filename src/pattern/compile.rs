//! Bounded regex compilation for pattern construction
//!
//! All patterns go through a single compilation path that enforces size
//! limits, so a runaway expression fails at construction instead of
//! ballooning the compiled program.

use crate::error::ScanError;
use regex::{Regex, RegexBuilder};

/// Maximum pattern expression length
const MAX_EXPRESSION_LENGTH: usize = 1000;

/// Maximum compiled program size (10 MB)
const MAX_COMPILED_SIZE: usize = 10 * 1024 * 1024;

/// Maximum lazy DFA cache size (2 MB)
const MAX_DFA_SIZE: usize = 2 * 1024 * 1024;

/// Compile a pattern expression with size limits applied
pub(crate) fn compile_bounded(name: &str, expression: &str) -> Result<Regex, ScanError> {
    if expression.is_empty() {
        return Err(ScanError::InvalidPattern {
            name: name.to_string(),
            reason: "empty expression".to_string(),
        });
    }

    if expression.len() > MAX_EXPRESSION_LENGTH {
        return Err(ScanError::InvalidPattern {
            name: name.to_string(),
            reason: format!(
                "expression too long: {} characters (max: {})",
                expression.len(),
                MAX_EXPRESSION_LENGTH
            ),
        });
    }

    RegexBuilder::new(expression)
        .size_limit(MAX_COMPILED_SIZE)
        .dfa_size_limit(MAX_DFA_SIZE)
        .build()
        .map_err(|e| ScanError::InvalidPattern {
            name: name.to_string(),
            reason: e.to_string(),
        })
}
