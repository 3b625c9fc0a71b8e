//! Random Selection Tests
//!
//! Verifies the scripted `random` command: seeded reproducibility, filter
//! constraints, and the silent no-op on an empty view.

use anyhow::Result;
use cogito_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_same_seed_picks_the_same_thought() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sized_thoughts(50))?;

    let first = world
        .command()
        .args(["random", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let second = world
        .command()
        .args(["random", "--seed", "7"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert!(!first.is_empty());
    assert_eq!(first, second);

    Ok(())
}

#[test]
fn test_random_respects_the_filter() -> Result<()> {
    // Given: exactly one thought matches the search
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .args(["random", "--search", "obstacle", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Marcus Aurelius"));

    Ok(())
}

#[test]
fn test_empty_view_is_a_silent_noop() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .args(["random", "--search", "no such phrase"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn test_random_json_is_one_record() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    let output = world
        .command()
        .args(["random", "--seed", "3", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(parsed.is_object());
    assert!(parsed["text"].is_string());

    Ok(())
}
