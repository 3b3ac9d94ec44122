//! Integration tests for CLI

use assert_cmd::Command;
use catalog_rank::config::ENV_PREFIX;
use predicates::prelude::*;
use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::process::Command as StdCommand;
use tempfile::TempDir;

const CATALOG: &str = "\
uniq_id,product_name,manufacturer,number_of_reviews,average_review_rating,amazon_category_and_sub_category
1,Red Car,Mattel,5,4.0 out of 5 stars,Toys & Games > Cars
2,\"Truck, large\",Tonka,50,3.0 out of 5 stars,Toys & Games > Trucks
3,Blue Car,Mattel,20,4.0 out of 5 stars,Toys & Games > Cars
4,Steam Train,Hornby,\"1,200\",4.8 out of 5 stars,Hobbies > Model Trains
5,Odd One,Acme,7,2.0 out of 5 stars,Toys2 > Misc
";

fn cmd(dir: &Path) -> Command {
    let mut std_cmd = StdCommand::new(assert_cmd::cargo::cargo_bin!("catalog-rank"));
    std_cmd.current_dir(dir);
    std_cmd.env_remove("RUST_LOG");
    remove_prefixed_env(&mut std_cmd, std::env::vars_os().map(|(var, _)| var));
    Command::from_std(std_cmd)
}

/// Keep config overrides from the caller's environment out of the binary under test.
fn remove_prefixed_env(cmd: &mut StdCommand, vars: impl IntoIterator<Item = OsString>) {
    for var in vars {
        if var.to_string_lossy().starts_with(ENV_PREFIX) {
            cmd.env_remove(var);
        }
    }
}

fn workspace() -> TempDir {
    let tmp = TempDir::new().expect("tmp");
    fs::write(tmp.path().join("catalog.csv"), CATALOG).expect("write catalog");
    tmp
}

#[test]
fn test_cli_version() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path()).arg("--version").assert().success().stdout(predicate::str::contains("catalog-rank"));
}

#[test]
fn test_cli_help() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rank the top products"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("batch"))
        .stdout(predicate::str::contains("categories"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_search_prints_table_and_writes_report() {
    let tmp = workspace();
    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "--count", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("item_name"))
        .stdout(predicate::str::contains("Red Car"))
        .stdout(predicate::str::contains("Blue Car"))
        .stdout(predicate::str::contains("Truck").not());

    let report = fs::read_to_string(tmp.path().join("output.csv")).expect("report");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(
        lines,
        vec![
            "input_item_type,input_item_category,input_number_to_generate,output_item_name,output_item_rating,output_item_num_reviews",
            "toys,Toys,2,Red Car,4,5",
            "toys,Toys,2,Blue Car,4,20",
        ]
    );
}

#[test]
fn test_search_json_format() {
    let tmp = workspace();
    let output = cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "-c", "Hobbies", "-n", "3", "--format", "json"])
        .args(["--no-output"])
        .output()
        .expect("run");
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(parsed["results"][0]["id"], "4");
    assert_eq!(parsed["results"][0]["review_count"], 1200);
    assert_eq!(parsed["results"].as_array().map(Vec::len), Some(1));
    assert!(!tmp.path().join("output.csv").exists());
}

#[test]
fn test_search_unknown_category_is_empty_not_error() {
    let tmp = workspace();
    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "toys", "--count", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No products found."));

    let report = fs::read_to_string(tmp.path().join("output.csv")).expect("report");
    assert_eq!(report.lines().count(), 1);
}

#[test]
fn test_search_rejects_zero_count() {
    let tmp = workspace();
    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
}

#[test]
fn test_search_rejects_negative_and_text_counts() {
    let tmp = workspace();
    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "--count", "-2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must be at least 1"));
    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "--count", "two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a whole number"));
}

#[test]
fn test_search_reports_missing_catalog() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path())
        .args(["search", "--catalog", "missing.csv", "--category", "Toys", "--count", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load catalog"));
}

#[test]
fn test_malformed_catalog_fails_unless_skipped() {
    let tmp = TempDir::new().expect("tmp");
    let body = format!("{CATALOG}6,Broken,Acme,lots,4.0,Toys & Games > Cars\n");
    fs::write(tmp.path().join("catalog.csv"), body).expect("write");

    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "-n", "1", "--no-output"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed number_of_reviews"));

    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "--category", "Toys", "-n", "1", "--no-output"])
        .args(["--on-malformed", "skip"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Red Car"));
}

#[test]
fn test_batch_reads_query_file() {
    let tmp = workspace();
    fs::write(tmp.path().join("input.csv"), "toys,Toys,1\n").expect("write input");

    cmd(tmp.path())
        .args(["batch", "input.csv", "--catalog", "catalog.csv", "--output", "out/result.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 results"));

    let report = fs::read_to_string(tmp.path().join("out/result.csv")).expect("report");
    assert!(report.ends_with("toys,Toys,1,Red Car,4,5\n"));
}

#[test]
fn test_batch_rejects_short_query_row() {
    let tmp = workspace();
    fs::write(tmp.path().join("input.csv"), "toys,Toys\n").expect("write input");

    cmd(tmp.path())
        .args(["batch", "input.csv", "--catalog", "catalog.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing the count field"));
}

#[test]
fn test_categories_lists_distinct_primary_categories() {
    let tmp = workspace();
    cmd(tmp.path())
        .args(["categories", "--catalog", "catalog.csv"])
        .assert()
        .success()
        .stdout("Toys\nHobbies\nToys2\n");
}

#[test]
fn test_config_file_sets_catalog_and_output() {
    let tmp = workspace();
    fs::write(
        tmp.path().join("catalog-rank.toml"),
        "catalog_path = 'catalog.csv'\noutput_path = 'reports/top.csv'\nitem_type = 'games'\n",
    )
    .expect("write config");

    cmd(tmp.path()).args(["search", "--category", "Hobbies", "--count", "1"]).assert().success();

    let report = fs::read_to_string(tmp.path().join("reports/top.csv")).expect("report");
    assert!(report.contains("games,Hobbies,1,Steam Train,4.8,1200"));
}

#[test]
fn test_env_overrides_config_file() {
    let tmp = workspace();
    fs::write(tmp.path().join("catalog-rank.toml"), "catalog_path = 'catalog.csv'\n")
        .expect("write config");

    cmd(tmp.path())
        .env("CATALOG_RANK_OUTPUT_PATH", "env.csv")
        .args(["search", "--category", "Toys", "--count", "1"])
        .assert()
        .success();

    assert!(tmp.path().join("env.csv").exists());
    assert!(!tmp.path().join("output.csv").exists());
}

#[test]
fn test_search_shows_companion_content() {
    let tmp = workspace();
    fs::write(
        tmp.path().join("content.csv"),
        "input_keywords,output_content\nx,y\ntrains;hornby,Trains in miniature.\n",
    )
    .expect("write companion");

    cmd(tmp.path())
        .args(["search", "--catalog", "catalog.csv", "-c", "Hobbies", "-n", "1", "--no-output"])
        .args(["--companion", "content.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keywords: trains / hornby"))
        .stdout(predicate::str::contains("Trains in miniature."));
}

#[test]
fn test_completions_generate_script() {
    let tmp = TempDir::new().expect("tmp");
    cmd(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog-rank"));
}

#[test]
fn test_every_prefixed_variable_is_removed() {
    let mut std_cmd = StdCommand::new("catalog-rank");
    let vars = [
        "CATALOG_RANK_ITEM_TYPE",
        "CATALOG_RANK_ON_MALFORMED",
        "CATALOG_RANK_DEFAULT_COUNT",
        "HOME",
    ]
    .map(OsString::from);
    remove_prefixed_env(&mut std_cmd, vars);

    let removed: Vec<String> = std_cmd
        .get_envs()
        .filter(|(_, value)| value.is_none())
        .map(|(key, _)| key.to_string_lossy().into_owned())
        .collect();
    assert_eq!(removed.len(), 3);
    assert!(removed.iter().all(|key| key.starts_with(ENV_PREFIX)));
}

#[test]
fn test_env_item_type_reaches_report() {
    let tmp = workspace();
    cmd(tmp.path())
        .env("CATALOG_RANK_ITEM_TYPE", "games")
        .args(["search", "--catalog", "catalog.csv", "--category", "Hobbies", "--count", "1"])
        .assert()
        .success();

    let report = fs::read_to_string(tmp.path().join("output.csv")).expect("report");
    assert!(report.contains("games,Hobbies,1,Steam Train,4.8,1200"));
}
