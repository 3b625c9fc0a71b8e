//! Categories Tests
//!
//! Verifies the derived category set: first-seen order, no sentinel, and
//! JSON output.

use anyhow::Result;
use cogito_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_categories_in_first_seen_order() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::diff("wisdom\nlove\nstoicism\n"));

    Ok(())
}

#[test]
fn test_categories_exclude_the_sentinel() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("all").not());

    Ok(())
}

#[test]
fn test_categories_json() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    let output = world
        .command()
        .args(["categories", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: Vec<String> = serde_json::from_slice(&output)?;
    assert_eq!(parsed, vec!["wisdom", "love", "stoicism"]);

    Ok(())
}
