// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rstest::rstest;

#[rstest]
#[case(None, "warn")]
#[case(Some("debug"), "debug")]
#[case(Some("dayrun=info"), "dayrun=info")]
fn valid_directives_are_used(#[case] directive: Option<&str>, #[case] expected: &str) {
    let (filter, rejected) = build_filter(directive);
    assert_eq!(filter.to_string(), expected);
    assert_eq!(rejected, None);
}

#[test]
fn invalid_directive_falls_back() {
    let (filter, rejected) = build_filter(Some("dayrun=loud"));
    assert_eq!(filter.to_string(), DEFAULT_FILTER);
    assert_eq!(rejected.as_deref(), Some("dayrun=loud"));
}

#[test]
fn init_twice_does_not_panic() {
    init();
    init();
}
