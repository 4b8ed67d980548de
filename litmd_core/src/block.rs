use std::cell::OnceCell;

use derive_more::Deref;
use serde::Serialize;

use crate::indent::minimum_indent;

/// A typed unit of content produced by the parser, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Block {
	/// Lines taken verbatim from a `/*-` ... `-*/` region.
	Prose(ProseBlock),
	/// Lines taken verbatim from a `` //` `` ... `` //` `` region.
	Code(CodeBlock),
	/// A `//#include "<path>"` directive. Carries no content of its own.
	Include(IncludeDirective),
}

impl Block {
	/// Short lowercase name of the variant, used in listings and logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Prose(_) => "prose",
			Self::Code(_) => "code",
			Self::Include(_) => "include",
		}
	}

	pub fn prose<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Prose(ProseBlock::new(lines))
	}

	pub fn code<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self::Code(CodeBlock::new(lines))
	}

	pub fn include(path: impl Into<String>) -> Self {
		Self::Include(IncludeDirective { path: path.into() })
	}
}

/// Prose lines, each with its original line terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, Serialize)]
pub struct ProseBlock {
	#[deref]
	lines: Vec<String>,
}

impl ProseBlock {
	pub fn new<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			lines: lines.into_iter().map(Into::into).collect(),
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}
}

/// Code lines, each with its original line terminator. The minimum indent is
/// computed on first use and cached.
#[derive(Debug, Clone, Default, Deref, Serialize)]
pub struct CodeBlock {
	#[deref]
	lines: Vec<String>,
	#[serde(skip)]
	minimum_indent: OnceCell<usize>,
}

impl CodeBlock {
	pub fn new<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			lines: lines.into_iter().map(Into::into).collect(),
			minimum_indent: OnceCell::new(),
		}
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	/// Smallest leading-whitespace width among the non-blank lines.
	pub fn minimum_indent(&self) -> usize {
		*self
			.minimum_indent
			.get_or_init(|| minimum_indent(&self.lines))
	}
}

impl PartialEq for CodeBlock {
	fn eq(&self, other: &Self) -> bool {
		self.lines == other.lines
	}
}

impl Eq for CodeBlock {}

/// Reference to content that is resolved at render time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncludeDirective {
	pub path: String,
}
