use std::path::Path;
use std::path::PathBuf;

use globset::Glob;
use globset::GlobSet;
use globset::GlobSetBuilder;
use serde::Deserialize;

use crate::BlankLinePolicy;
use crate::LitError;
use crate::LitResult;
use crate::Parser;
use crate::RenderOptions;
use crate::Translator;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["litmd.toml", ".litmd.toml", ".config/litmd.toml"];

/// Source file pattern used when none is configured.
pub const DEFAULT_SOURCE_PATTERN: &str = "*.kt";

/// Configuration loaded from a `litmd.toml` file.
///
/// ```toml
/// [render]
/// fence_language = "kotlin"
///
/// [parse]
/// blank_lines = "drop"
///
/// [sources]
/// patterns = ["*.kt", "*.kts"]
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LitConfig {
	/// How blocks are rendered to markdown.
	#[serde(default)]
	pub render: RenderOptions,
	/// How source text is split into blocks.
	#[serde(default)]
	pub parse: ParseConfig,
	/// Which files in a source directory make up the book.
	#[serde(default)]
	pub sources: SourcesConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParseConfig {
	/// Whether blank lines outside regions are dropped or passed through.
	#[serde(default)]
	pub blank_lines: BlankLinePolicy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourcesConfig {
	/// Glob patterns matched against file names (not paths).
	#[serde(default = "default_patterns")]
	pub patterns: Vec<String>,
}

impl Default for SourcesConfig {
	fn default() -> Self {
		Self {
			patterns: default_patterns(),
		}
	}
}

fn default_patterns() -> Vec<String> {
	vec![DEFAULT_SOURCE_PATTERN.to_string()]
}

impl SourcesConfig {
	pub fn new<I, S>(patterns: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			patterns: patterns.into_iter().map(Into::into).collect(),
		}
	}

	/// Compile the configured patterns. Any invalid pattern is an error.
	pub fn glob_set(&self) -> LitResult<GlobSet> {
		let mut builder = GlobSetBuilder::new();

		for pattern in &self.patterns {
			let glob = Glob::new(pattern).map_err(|e| LitError::InvalidPattern {
				pattern: pattern.clone(),
				reason: e.to_string(),
			})?;
			builder.add(glob);
		}

		builder.build().map_err(|e| LitError::InvalidPattern {
			pattern: self.patterns.join(", "),
			reason: e.to_string(),
		})
	}
}

impl LitConfig {
	/// Find the first config file candidate that exists under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from `root`, returning `None` when there is no config
	/// file.
	pub fn load(root: &Path) -> LitResult<Option<LitConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		tracing::debug!(path = %config_path.display(), "loading config");
		let content = std::fs::read_to_string(&config_path)?;
		let config: LitConfig =
			toml::from_str(&content).map_err(|e| LitError::ConfigParse(e.to_string()))?;

		Ok(Some(config))
	}

	/// Load the config from `root`, falling back to defaults.
	pub fn load_or_default(root: &Path) -> LitResult<LitConfig> {
		Ok(Self::load(root)?.unwrap_or_default())
	}

	pub fn parser(&self) -> Parser {
		Parser::new().with_blank_lines(self.parse.blank_lines)
	}

	/// Build a reusable translator from this config.
	pub fn translator(&self) -> Translator {
		Translator::new(self.parser(), self.render.clone())
	}
}
