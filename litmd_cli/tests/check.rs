mod common;

use litmd_core::AnyEmptyResult;
use predicates::prelude::PredicateBooleanExt;

const EXPECTED: &str = "# Intro\n\n```kotlin\nval answer = 42\n```\n\n\n";

#[test]
fn check_passes_after_build() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "src/01_intro.kt", common::INTRO)?;
	let output = tmp.path().join("book.md");

	common::litmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("build")
		.arg(tmp.path().join("src"))
		.arg(&output)
		.assert()
		.success();

	common::litmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("check")
		.arg(tmp.path().join("src"))
		.arg(&output)
		.assert()
		.success()
		.stdout(predicates::str::contains("up to date"));

	assert_eq!(std::fs::read_to_string(&output)?, EXPECTED);

	Ok(())
}

#[test]
fn check_fails_when_stale() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "src/01_intro.kt", common::INTRO)?;
	common::write_file(tmp.path(), "book.md", "old\n")?;

	common::litmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("check")
		.arg(tmp.path().join("src"))
		.arg(tmp.path().join("book.md"))
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("out of date")
				.and(predicates::str::contains("litmd build"))
				.and(predicates::str::contains("-old").not()),
		);

	assert_eq!(std::fs::read_to_string(tmp.path().join("book.md"))?, "old\n");

	Ok(())
}

#[test]
fn check_diff_shows_changes() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "src/01_intro.kt", common::INTRO)?;
	common::write_file(tmp.path(), "book.md", "# Intro\nold\n")?;

	common::litmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("check")
		.arg(tmp.path().join("src"))
		.arg(tmp.path().join("book.md"))
		.arg("--diff")
		.assert()
		.code(1)
		.stderr(
			predicates::str::contains("-old")
				.and(predicates::str::contains("+```kotlin"))
				.and(predicates::str::contains("   # Intro")),
		);

	Ok(())
}

#[test]
fn check_fails_when_output_is_missing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_file(tmp.path(), "src/01_intro.kt", common::INTRO)?;

	common::litmd_cmd()
		.arg("--path")
		.arg(tmp.path())
		.arg("check")
		.arg(tmp.path().join("src"))
		.arg(tmp.path().join("book.md"))
		.assert()
		.code(1)
		.stderr(predicates::str::contains("does not exist"));

	assert!(!tmp.path().join("book.md").exists());

	Ok(())
}
