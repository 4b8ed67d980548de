use std::collections::HashMap;
use std::path::Path;

use rstest::fixture;

use crate::LitError;
use crate::LitResult;
use crate::Translator;

/// A resolver for renders that must never touch an include.
pub fn null_resolver(path: &str) -> LitResult<Vec<String>> {
	panic!("should not need to resolve `{path}`")
}

/// A resolver backed by an in-memory table. Unknown paths fail.
pub fn static_resolver(
	entries: &[(&str, &[&str])],
) -> impl Fn(&str) -> LitResult<Vec<String>> + use<> {
	let table: HashMap<String, Vec<String>> = entries
		.iter()
		.map(|(path, lines)| {
			(
				(*path).to_string(),
				lines.iter().map(|line| (*line).to_string()).collect(),
			)
		})
		.collect();

	move |path: &str| {
		table
			.get(path)
			.cloned()
			.ok_or_else(|| LitError::UnresolvedInclude {
				path: path.to_string(),
				reason: "not in table".to_string(),
			})
	}
}

#[fixture]
pub fn default_translator() -> Translator {
	Translator::default()
}

pub fn write_file(root: &Path, relative: &str, content: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		std::fs::create_dir_all(parent).unwrap_or_else(|e| panic!("mkdir {relative}: {e}"));
	}
	std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {relative}: {e}"));
}

pub const CHAPTER_ONE: &str = "\
package book

/*-
# Chapter 1
-*/

object Context {
    //`
    fun greet() = \"hello\"
    //`
}

//#include \"snippets/aside.md\"
";

pub const ASIDE: &str = "> an aside\n";

pub const CHAPTER_TWO: &str = "\
/*-
# Chapter 2
-*/
";
