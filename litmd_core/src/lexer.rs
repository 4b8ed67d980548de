use logos::Logos;

/// Raw tokens produced by logos for the marker prefix of a single line.
#[derive(Logos, Debug, PartialEq)]
enum RawToken {
	#[token("/*-")]
	ProseOpen,
	#[token("-*/")]
	ProseClose,
	#[token("//`")]
	CodeFence,
	#[token("//#include")]
	IncludeKeyword,
	#[regex(r#""[^"\n]*""#)]
	QuotedPath,
	#[regex(r"[ \t\r\n]+")]
	Whitespace,
}

/// The role a single source line plays in the marker grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
	/// `//#include "<path>"` on a line by itself.
	Include(&'a str),
	/// First non-space characters are `/*-`.
	ProseOpen,
	/// First non-space characters are `-*/`.
	ProseClose,
	/// First non-space characters are `` //` ``. Opens and closes code regions.
	CodeFence,
	/// Anything else.
	Text,
}

/// Classify a raw line (terminator included) by its first non-space
/// characters. An include directive wins over every other marker.
pub fn classify_line(line: &str) -> LineKind<'_> {
	let trimmed = line.trim_start();

	if let Some(path) = include_path(trimmed) {
		return LineKind::Include(path);
	}

	match RawToken::lexer(trimmed).next() {
		Some(Ok(RawToken::ProseOpen)) => LineKind::ProseOpen,
		Some(Ok(RawToken::ProseClose)) => LineKind::ProseClose,
		Some(Ok(RawToken::CodeFence)) => LineKind::CodeFence,
		_ => LineKind::Text,
	}
}

/// Extract the path from `//#include "<path>"`. Only whitespace may surround
/// the quoted path; any other trailing content disqualifies the line.
fn include_path(trimmed: &str) -> Option<&str> {
	let mut lexer = RawToken::lexer(trimmed);

	if !matches!(lexer.next(), Some(Ok(RawToken::IncludeKeyword))) {
		return None;
	}

	let mut path = None;

	while let Some(token) = lexer.next() {
		match token {
			Ok(RawToken::Whitespace) => {}
			Ok(RawToken::QuotedPath) if path.is_none() => {
				let slice = lexer.slice();
				path = Some(&slice[1..slice.len() - 1]);
			}
			_ => return None,
		}
	}

	path
}
