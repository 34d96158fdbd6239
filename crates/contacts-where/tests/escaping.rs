//! Property tests for literal escaping

use contacts_where::{Value, Where, quote};
use proptest::prelude::*;
use std::collections::HashMap;

/// Parse a single-quoted literal back, treating `''` as an embedded quote
fn unquote(literal: &str) -> Option<String> {
    let inner = literal.strip_prefix('\'')?.strip_suffix('\'')?;
    let mut out = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\'' {
            if chars.next() != Some('\'') {
                return None;
            }
        }
        out.push(c);
    }
    Some(out)
}

proptest! {
    #[test]
    fn quoted_literal_round_trips(s in ".*") {
        let literal = quote(&s);
        prop_assert_eq!(unquote(&literal), Some(s));
    }

    #[test]
    fn every_embedded_quote_is_doubled(s in "[a-z' ]*'[a-z' ]*") {
        let rendered = Where::equal_to("col", s.as_str()).render();
        let literal = rendered.strip_prefix("col=").unwrap();
        prop_assert_eq!(literal.matches('\'').count(), s.matches('\'').count() * 2 + 2);
        prop_assert_eq!(unquote(literal), Some(s));
    }

    #[test]
    fn equality_filter_matches_its_own_value(s in "[^%_]*") {
        let row: HashMap<String, Value> =
            [("col".to_string(), Value::from(s.as_str()))].into_iter().collect();
        prop_assert!(Where::equal_to("col", s.as_str()).matches(&row));
        prop_assert!(Where::contains("col", &s).matches(&row));
    }
}
