//! List & Filtering Tests
//!
//! Verifies the scripted `list` command: windowing, --all, --limit, the
//! match rule, and JSON output.

use anyhow::Result;
use cogito_testing::{TestWorld, fixtures};
use predicates::prelude::*;

#[test]
fn test_list_shows_one_batch_by_default() -> Result<()> {
    // Given: more thoughts than one batch
    let world = TestWorld::with_thoughts(&fixtures::sized_thoughts(25))?;

    // Then: the window is capped at the batch size
    world
        .command()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 20 of 25 thoughts"));

    Ok(())
}

#[test]
fn test_list_all_prints_entire_view() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sized_thoughts(25))?;

    world
        .command()
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 25 of 25 thoughts"));

    Ok(())
}

#[test]
fn test_list_limit_caps_the_window() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .args(["list", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 2 of 5 thoughts"));

    Ok(())
}

#[test]
fn test_search_matches_text_and_author_case_insensitively() -> Result<()> {
    // Given: a mixed corpus where "love" appears in texts only
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    // When: searching with different casing
    let assert = world
        .command()
        .args(["list", "--search", "LOVE"])
        .assert()
        .success();

    // Then: only matching thoughts are shown, and the summary mentions the
    // unfiltered total
    assert
        .stdout(predicate::str::contains("Shakespeare"))
        .stdout(predicate::str::contains("George Sand"))
        .stdout(predicate::str::contains("Socrates").not())
        .stdout(predicate::str::contains("(filtered from 5 total)"));

    Ok(())
}

#[test]
fn test_category_filter_is_exact() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .args(["list", "--category", "wisdom"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 2 of 2 thoughts"))
        .stdout(predicate::str::contains("Shakespeare").not());

    Ok(())
}

#[test]
fn test_json_output_preserves_collection_order() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    let output = world
        .command()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output)?;
    let ids: Vec<&str> = parsed
        .as_array()
        .expect("json output is an array")
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);

    Ok(())
}

#[test]
fn test_no_matches_prints_empty_summary() -> Result<()> {
    let world = TestWorld::with_thoughts(&fixtures::sample_thoughts())?;

    world
        .command()
        .args(["list", "--search", "no such phrase"])
        .assert()
        .success()
        .stdout(predicate::str::contains("showing 0 of 0 thoughts"));

    Ok(())
}
