use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum LitError {
	#[error(transparent)]
	#[diagnostic(code(litmd::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to resolve include `{path}`: {reason}")]
	#[diagnostic(
		code(litmd::unresolved_include),
		help("include paths are resolved relative to the directory of the including file")
	)]
	UnresolvedInclude { path: String, reason: String },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(litmd::config_parse),
		help("check that litmd.toml is valid TOML with [render], [parse] and/or [sources] sections")
	)]
	ConfigParse(String),

	#[error("invalid source pattern `{pattern}`: {reason}")]
	#[diagnostic(code(litmd::invalid_pattern))]
	InvalidPattern { pattern: String, reason: String },

	#[error("failed to read source directory `{dir}`")]
	#[diagnostic(code(litmd::source_walk))]
	SourceWalk {
		dir: String,
		#[source]
		source: ignore::Error,
	},

	#[error("no source files found in `{dir}`")]
	#[diagnostic(
		code(litmd::no_sources),
		help("source files are matched by the `[sources] patterns` globs, `*.kt` by default")
	)]
	NoSources { dir: String },
}

pub type LitResult<T> = Result<T, LitError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
