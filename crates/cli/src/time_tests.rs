// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;
use chrono::{Datelike, Timelike};

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, FAKE_CLOCK_FORMAT).unwrap()
}

#[test]
fn test_system_clock_is_recent() {
    let now = SystemClock::new().now();
    assert!(now.year() >= 2024);
}

#[test]
fn test_fake_clock_new() {
    let clock = FakeClock::new(at("2024-03-07 09:05:00"));
    assert_eq!(clock.now(), at("2024-03-07 09:05:00"));
}

#[test]
fn test_fake_clock_parse() {
    let clock = FakeClock::parse(" 2024-03-07 09:05:30 ").unwrap();
    let now = clock.now();
    assert_eq!((now.hour(), now.minute(), now.second()), (9, 5, 30));
}

#[test]
fn test_fake_clock_parse_rejects_garbage() {
    assert!(FakeClock::parse("07/03/2024 9:05").is_err());
}

#[test]
fn test_fake_clock_advance_crosses_midnight() {
    let clock = FakeClock::new(at("2024-03-07 23:59:30"));
    clock.advance_secs(45);
    assert_eq!(clock.now(), at("2024-03-08 00:00:15"));
}

#[test]
fn test_fake_clock_advance_millis() {
    let clock = FakeClock::new(at("2024-03-07 09:05:00"));
    clock.advance(Duration::from_millis(1500));
    assert_eq!(clock.now().second(), 1);
    assert_eq!(clock.now().nanosecond(), 500_000_000);
}

#[test]
fn test_fake_clock_set() {
    let clock = FakeClock::new(at("2024-03-07 09:05:00"));
    clock.set(at("2030-01-01 00:00:00"));
    assert_eq!(clock.now(), at("2030-01-01 00:00:00"));
}

#[test]
fn test_fake_clock_clones_share_time() {
    let clock = FakeClock::new(at("2024-03-07 09:05:00"));
    let other = clock.clone();
    clock.advance_secs(60);
    assert_eq!(other.now(), at("2024-03-07 09:06:00"));
}

#[test]
fn test_clock_handle_variants() {
    let system = ClockHandle::default();
    assert!(!system.is_fake());
    assert!(system.as_fake().is_none());

    let fake = ClockHandle::fake_at(at("2024-03-07 09:05:00"));
    assert!(fake.is_fake());
    fake.as_fake().unwrap().advance_secs(1);
    assert_eq!(fake.now(), at("2024-03-07 09:05:01"));
}
