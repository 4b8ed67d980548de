use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use litmd_cli::Commands;
use litmd_cli::LitCli;
use litmd_cli::OutputFormat;
use litmd_core::Block;
use litmd_core::LitConfig;
use litmd_core::ParseDiagnostic;
use litmd_core::book;
use owo_colors::OwoColorize;
use serde::Serialize;
use similar::ChangeTag;
use similar::TextDiff;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,green) => {
		if color_enabled() {
			format!("{}", $text.green())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = LitCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose, use_color);

	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match &args.command {
		Some(Commands::Build { source_dir, output }) => run_build(&args, source_dir, output),
		Some(Commands::Check {
			source_dir,
			output,
			diff,
		}) => run_check(&args, source_dir, output, *diff),
		Some(Commands::Blocks { file, format }) => run_blocks(&args, file, *format),
		None => {
			eprintln!("No subcommand specified. Run `litmd --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		match e.downcast::<litmd_core::LitError>() {
			Ok(lit_err) => {
				let report: miette::Report = (*lit_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

/// Logs go to stderr so they never mix with generated output. `--verbose`
/// wins over `RUST_LOG`.
fn init_tracing(verbose: bool, use_color: bool) {
	let filter = if verbose {
		EnvFilter::new("debug")
	} else {
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
	};

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_ansi(use_color)
		.with_target(false)
		.init();
}

fn resolve_root(args: &LitCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &LitCli) -> Result<LitConfig, Box<dyn std::error::Error>> {
	let root = resolve_root(args);
	let config = LitConfig::load_or_default(&root)?;

	if args.verbose {
		match LitConfig::resolve_path(&root) {
			Some(path) => eprintln!("Using config: {}", path.display()),
			None => eprintln!("No config found in {}, using defaults", root.display()),
		}
	}

	Ok(config)
}

fn run_build(
	args: &LitCli,
	source_dir: &Path,
	output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let translator = config.translator();
	let content = book::build_book(source_dir, output, &translator, &config.sources)?;

	println!(
		"{} {} ({} line(s))",
		colored!("Wrote", green),
		output.display(),
		content.lines().count()
	);

	Ok(())
}

fn run_check(
	args: &LitCli,
	source_dir: &Path,
	output: &Path,
	diff: bool,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let translator = config.translator();
	let result = book::check_book(source_dir, output, &translator, &config.sources)?;

	if result.is_ok() {
		println!("{} {} is up to date.", colored!("✓", green), output.display());
		return Ok(());
	}

	match &result.current {
		Some(current) => {
			eprintln!(
				"{} {} is out of date.",
				colored!("✗", red),
				result.output.display()
			);

			if diff {
				eprintln!();
				print_diff(current, &result.expected);
			}
		}
		None => {
			eprintln!(
				"{} {} does not exist.",
				colored!("✗", red),
				result.output.display()
			);
		}
	}

	eprintln!(
		"\nRun `litmd build {} {}` to regenerate it.",
		source_dir.display(),
		output.display()
	);
	process::exit(1);
}

#[derive(Serialize)]
struct BlocksReport<'a> {
	blocks: &'a [Block],
	diagnostics: Vec<DiagnosticEntry>,
}

#[derive(Serialize)]
struct DiagnosticEntry {
	diagnostic: ParseDiagnostic,
	message: String,
}

fn run_blocks(
	args: &LitCli,
	file: &Path,
	format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
	let config = load_config(args)?;
	let translator = config.translator();
	let content = std::fs::read_to_string(file).map_err(litmd_core::LitError::from)?;
	let (blocks, diagnostics) = translator.parse_with_diagnostics(&content);
	tracing::debug!(
		path = %file.display(),
		blocks = blocks.len(),
		diagnostics = diagnostics.len(),
		"parsed source"
	);

	match format {
		OutputFormat::Text => {
			for (index, block) in blocks.iter().enumerate() {
				println!("{:>3}  {}", index + 1, describe_block(block));
			}

			if blocks.is_empty() {
				println!("No blocks found in {}.", file.display());
			}

			for diagnostic in &diagnostics {
				eprintln!(
					"{} {}: {}",
					colored!("warning:", yellow),
					file.display(),
					diagnostic.message()
				);
			}
		}
		OutputFormat::Json => {
			let report = BlocksReport {
				blocks: &blocks,
				diagnostics: diagnostics
					.into_iter()
					.map(|diagnostic| {
						DiagnosticEntry {
							message: diagnostic.message(),
							diagnostic,
						}
					})
					.collect(),
			};
			println!("{}", serde_json::to_string_pretty(&report)?);
		}
	}

	Ok(())
}

fn describe_block(block: &Block) -> String {
	match block {
		Block::Prose(prose) => format!("prose    {} line(s)", prose.len()),
		Block::Code(code) => {
			format!(
				"code     {} line(s), indent {}",
				code.len(),
				code.minimum_indent()
			)
		}
		Block::Include(include) => format!("include  {}", include.path),
	}
}

fn print_diff(current: &str, expected: &str) {
	let diff = TextDiff::from_lines(current, expected);
	for change in diff.iter_all_changes() {
		match change.tag() {
			ChangeTag::Delete => {
				eprint!("  {}", colored!(format!("-{change}"), red));
			}
			ChangeTag::Insert => {
				eprint!("  {}", colored!(format!("+{change}"), green));
			}
			ChangeTag::Equal => {
				eprint!("   {change}");
			}
		}
	}
}
