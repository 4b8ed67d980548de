use std::path::Path;
use std::path::PathBuf;

use crate::LitError;
use crate::LitResult;

/// Maps an include path to the lines it stands for. Every returned line
/// carries its own terminator.
pub trait ContentResolver {
	fn resolve(&self, path: &str) -> LitResult<Vec<String>>;
}

impl<F> ContentResolver for F
where
	F: Fn(&str) -> LitResult<Vec<String>>,
{
	fn resolve(&self, path: &str) -> LitResult<Vec<String>> {
		self(path)
	}
}

/// Resolves include paths against a base directory on disk.
#[derive(Debug, Clone)]
pub struct FileResolver {
	base_dir: PathBuf,
}

impl FileResolver {
	pub fn new(base_dir: impl Into<PathBuf>) -> Self {
		Self {
			base_dir: base_dir.into(),
		}
	}

	/// A resolver for includes written inside `source`, relative to the
	/// directory that contains it.
	pub fn for_source(source: &Path) -> Self {
		let base_dir = source
			.parent()
			.map_or_else(|| PathBuf::from("."), Path::to_path_buf);
		Self::new(base_dir)
	}

	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}
}

impl ContentResolver for FileResolver {
	fn resolve(&self, path: &str) -> LitResult<Vec<String>> {
		let full_path = self.base_dir.join(path);
		tracing::debug!(path = %full_path.display(), "resolving include");

		let content =
			std::fs::read_to_string(&full_path).map_err(|e| LitError::UnresolvedInclude {
				path: path.to_string(),
				reason: e.to_string(),
			})?;

		Ok(terminated_lines(&content))
	}
}

/// Split text into lines that keep their `\n`. A final line without a
/// terminator gets one.
pub fn terminated_lines(content: &str) -> Vec<String> {
	content
		.split_inclusive('\n')
		.map(|line| {
			if line.ends_with('\n') {
				line.to_string()
			} else {
				format!("{line}\n")
			}
		})
		.collect()
}
