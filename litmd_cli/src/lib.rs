use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Publish literate source files as a markdown book.",
	long_about = "litmd reads source files whose prose lives in `/*-` ... `-*/` comments and whose \
	              listings sit between //` markers, and renders them into one markdown \
	              document.\n\nInclude other files with `//#include \"path\"` on a line of its \
	              own; the path is relative to the including file.\n\nQuick start:\n  litmd build \
	              src/chapter_01 build/book/chapter_01.md\n  litmd check src/chapter_01 \
	              build/book/chapter_01.md --diff\n  litmd blocks src/chapter_01/01_intro.kt"
)]
pub struct LitCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Project root used to discover `litmd.toml`. Defaults to the current
	/// directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Translate every source file in a directory into one markdown file.
	///
	/// Source files are the non-hidden files directly inside `SOURCE_DIR`
	/// that match the configured patterns (`*.kt` by default), processed in
	/// file-name order. Missing parent directories of `OUTPUT` are created.
	Build {
		/// Directory holding the chapter's source files.
		source_dir: PathBuf,
		/// Markdown file to write.
		output: PathBuf,
	},
	/// Check that a generated markdown file matches its sources.
	///
	/// Exits with status 1 when the output is missing or stale. Nothing is
	/// written.
	Check {
		/// Directory holding the chapter's source files.
		source_dir: PathBuf,
		/// Previously generated markdown file.
		output: PathBuf,
		/// Show a diff between the current and expected output.
		#[arg(long, default_value_t = false)]
		diff: bool,
	},
	/// List the blocks parsed from a single source file.
	Blocks {
		/// The source file to parse.
		file: PathBuf,
		/// Output format for the listing.
		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// One line per block.
	Text,
	/// A JSON object with `blocks` and `diagnostics` arrays.
	Json,
}
