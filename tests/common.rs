//! Test utilities for police integration tests

#![allow(dead_code)]

use police::RuleCatalog;
use police::rules::RuleDefinition;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// A rule whose pattern is a literal token, titled after its position
pub fn token_rule(position: usize, token: &str) -> RuleDefinition {
    RuleDefinition {
        id: format!("rule-{position}"),
        title: format!("RULE {position}"),
        marker: "#".to_string(),
        pattern: regex::escape(token),
        message: format!("Token {token} is forbidden\nRemove it"),
        languages: vec![],
    }
}

/// Catalog of ten rules matching the tokens `TOKEN0` .. `TOKEN9`
pub fn numbered_catalog() -> RuleCatalog {
    RuleCatalog::from_definitions((0..10).map(|i| token_rule(i, &format!("TOKEN{i}"))))
        .expect("numbered catalog must build")
}

/// Catalog from the worked example: `var` declarations, then loose equality
pub fn var_and_loose_catalog() -> RuleCatalog {
    RuleCatalog::from_toml(
        r#"
[[rule]]
id = "no-var"
title = "CRITICAL ERROR"
marker = "🦖"
pattern = '\bvar\s+'
message = "Use let or const"

[[rule]]
id = "no-loose-equality"
title = "LOOSE COMPARISON"
marker = "🎰"
pattern = '(?:^|[^=!<>])==(?:[^=]|$)'
message = "Use ==="
"#,
    )
    .expect("example catalog must build")
}
