//! Turning a directory of literate sources into one markdown document.

use std::path::Path;
use std::path::PathBuf;

use ignore::WalkBuilder;

use crate::FileResolver;
use crate::LitError;
use crate::LitResult;
use crate::SourcesConfig;
use crate::Translator;

/// Result of comparing a book on disk with a fresh translation.
#[derive(Debug)]
pub struct CheckResult {
	/// The output file that was checked.
	pub output: PathBuf,
	/// What the sources translate to now.
	pub expected: String,
	/// What the output file currently holds, `None` if it doesn't exist.
	pub current: Option<String>,
}

impl CheckResult {
	/// Returns true if the output file exists and matches the sources.
	pub fn is_ok(&self) -> bool {
		self.current.as_deref() == Some(self.expected.as_str())
	}
}

/// List the source files directly inside `dir`, sorted by file name.
///
/// Hidden files and subdirectories are skipped. A file is a source when its
/// name matches one of the configured patterns.
pub fn source_files_in(dir: &Path, sources: &SourcesConfig) -> LitResult<Vec<PathBuf>> {
	let globs = sources.glob_set()?;
	let walker = WalkBuilder::new(dir)
		.standard_filters(false)
		.hidden(true)
		.max_depth(Some(1))
		.build();

	let mut files = Vec::new();

	for entry in walker {
		let entry = entry.map_err(|source| {
			LitError::SourceWalk {
				dir: dir.display().to_string(),
				source,
			}
		})?;

		if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
			continue;
		}

		if globs.is_match(entry.file_name()) {
			files.push(entry.into_path());
		}
	}

	files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
	Ok(files)
}

/// Translate one source file, resolving includes next to it.
pub fn translate_file(path: &Path, translator: &Translator) -> LitResult<Vec<String>> {
	tracing::debug!(path = %path.display(), "translating");
	let content = std::fs::read_to_string(path)?;
	translator.translate(&content, &FileResolver::for_source(path))
}

/// Translate every source in `dir` in file-name order. Each file's output is
/// followed by one blank separator line.
pub fn translate_directory(
	dir: &Path,
	translator: &Translator,
	sources: &SourcesConfig,
) -> LitResult<String> {
	let files = source_files_in(dir, sources)?;

	if files.is_empty() {
		return Err(LitError::NoSources {
			dir: dir.display().to_string(),
		});
	}

	let mut book = String::new();

	for file in &files {
		for line in translate_file(file, translator)? {
			book.push_str(&line);
		}
		book.push('\n');
	}

	tracing::info!(files = files.len(), dir = %dir.display(), "translated sources");
	Ok(book)
}

/// Write the book to `output`, creating missing parent directories.
pub fn write_book(output: &Path, content: &str) -> LitResult<()> {
	if let Some(parent) = output.parent() {
		if !parent.as_os_str().is_empty() {
			std::fs::create_dir_all(parent)?;
		}
	}

	std::fs::write(output, content)?;
	Ok(())
}

/// Translate `dir` and write the result to `output`. Returns the content
/// written.
pub fn build_book(
	dir: &Path,
	output: &Path,
	translator: &Translator,
	sources: &SourcesConfig,
) -> LitResult<String> {
	let book = translate_directory(dir, translator, sources)?;
	write_book(output, &book)?;
	Ok(book)
}

/// Compare `output` with a fresh translation of `dir` without writing.
pub fn check_book(
	dir: &Path,
	output: &Path,
	translator: &Translator,
	sources: &SourcesConfig,
) -> LitResult<CheckResult> {
	let expected = translate_directory(dir, translator, sources)?;
	let current = if output.is_file() {
		Some(std::fs::read_to_string(output)?)
	} else {
		None
	};

	Ok(CheckResult {
		output: output.to_path_buf(),
		expected,
		current,
	})
}
