use serde::Deserialize;
use serde::Serialize;

use crate::Block;
use crate::indent::is_blank;
use crate::lexer::LineKind;
use crate::lexer::classify_line;

/// What to do with a wholly blank line that sits outside every region.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
	/// Blank lines outside regions produce no output.
	#[default]
	Drop,
	/// Each blank line outside a region passes through as a one-line prose
	/// block.
	Keep,
}

/// The two multi-line region types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
	Prose,
	Code,
}

impl std::fmt::Display for RegionKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Prose => write!(f, "prose"),
			Self::Code => write!(f, "code"),
		}
	}
}

/// A diagnostic produced during parsing. These never stop parsing; they
/// describe input that was accepted under a lenient interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[non_exhaustive]
pub enum ParseDiagnostic {
	/// A region was still open at end of input and was closed implicitly.
	UnterminatedRegion {
		kind: RegionKind,
		/// 1-indexed line of the opening marker.
		line: usize,
	},
}

impl ParseDiagnostic {
	/// Human-readable message for this diagnostic.
	pub fn message(&self) -> String {
		match self {
			Self::UnterminatedRegion { kind, line } => {
				format!("{kind} region opened on line {line} is never closed")
			}
		}
	}
}

enum ParserState {
	Outside,
	InProse { lines: Vec<String>, opened_at: usize },
	InCode { lines: Vec<String>, opened_at: usize },
}

/// Line-oriented state machine that turns source text into [`Block`]s.
///
/// A `Parser` holds no per-parse state, so one value can be reused for any
/// number of sources.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
	blank_lines: BlankLinePolicy,
}

impl Parser {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with_blank_lines(mut self, policy: BlankLinePolicy) -> Self {
		self.blank_lines = policy;
		self
	}

	pub fn blank_lines(&self) -> BlankLinePolicy {
		self.blank_lines
	}

	/// Parse `source` into blocks, closing any unterminated region at end of
	/// input.
	pub fn parse(&self, source: &str) -> Vec<Block> {
		self.parse_with_diagnostics(source).0
	}

	/// Parse `source` and also report regions that were closed implicitly.
	pub fn parse_with_diagnostics(&self, source: &str) -> (Vec<Block>, Vec<ParseDiagnostic>) {
		let mut blocks = Vec::new();
		let mut diagnostics = Vec::new();
		let mut state = ParserState::Outside;

		for (index, line) in source.split_inclusive('\n').enumerate() {
			state = self.advance(state, line, index + 1, &mut blocks);
		}

		match state {
			ParserState::Outside => {}
			ParserState::InProse { lines, opened_at } => {
				tracing::warn!(line = opened_at, "prose region is never closed");
				diagnostics.push(ParseDiagnostic::UnterminatedRegion {
					kind: RegionKind::Prose,
					line: opened_at,
				});
				blocks.push(Block::prose(lines));
			}
			ParserState::InCode { lines, opened_at } => {
				tracing::warn!(line = opened_at, "code region is never closed");
				diagnostics.push(ParseDiagnostic::UnterminatedRegion {
					kind: RegionKind::Code,
					line: opened_at,
				});
				blocks.push(Block::code(lines));
			}
		}

		(blocks, diagnostics)
	}

	fn advance(
		&self,
		state: ParserState,
		line: &str,
		number: usize,
		blocks: &mut Vec<Block>,
	) -> ParserState {
		match state {
			ParserState::Outside => {
				match classify_line(line) {
					LineKind::Include(path) => {
						tracing::debug!(line = number, path, "include directive");
						blocks.push(Block::include(path));
						ParserState::Outside
					}
					LineKind::ProseOpen => {
						ParserState::InProse {
							lines: Vec::new(),
							opened_at: number,
						}
					}
					LineKind::CodeFence => {
						ParserState::InCode {
							lines: Vec::new(),
							opened_at: number,
						}
					}
					LineKind::ProseClose | LineKind::Text => {
						if self.blank_lines == BlankLinePolicy::Keep && is_blank(line) {
							blocks.push(Block::prose([line]));
						}
						ParserState::Outside
					}
				}
			}
			ParserState::InProse {
				mut lines,
				opened_at,
			} => {
				if classify_line(line) == LineKind::ProseClose {
					tracing::debug!(from = opened_at, to = number, "prose block");
					blocks.push(Block::prose(lines));
					return ParserState::Outside;
				}

				lines.push(line.to_string());
				ParserState::InProse { lines, opened_at }
			}
			ParserState::InCode {
				mut lines,
				opened_at,
			} => {
				if classify_line(line) == LineKind::CodeFence {
					tracing::debug!(from = opened_at, to = number, "code block");
					blocks.push(Block::code(lines));
					return ParserState::Outside;
				}

				lines.push(line.to_string());
				ParserState::InCode { lines, opened_at }
			}
		}
	}
}

/// Parse source text with the default [`Parser`].
pub fn parse(content: impl AsRef<str>) -> Vec<Block> {
	Parser::default().parse(content.as_ref())
}

/// Parse source text with the default [`Parser`] and return diagnostics too.
pub fn parse_with_diagnostics(content: impl AsRef<str>) -> (Vec<Block>, Vec<ParseDiagnostic>) {
	Parser::default().parse_with_diagnostics(content.as_ref())
}
