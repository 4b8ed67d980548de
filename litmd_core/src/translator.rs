use crate::Block;
use crate::ContentResolver;
use crate::LitResult;
use crate::ParseDiagnostic;
use crate::Parser;
use crate::RenderOptions;

/// Parser and renderer bundled together. Build one and reuse it for every
/// source in a book.
#[derive(Debug, Clone, Default)]
pub struct Translator {
	parser: Parser,
	options: RenderOptions,
}

impl Translator {
	pub fn new(parser: Parser, options: RenderOptions) -> Self {
		Self { parser, options }
	}

	pub fn parser(&self) -> &Parser {
		&self.parser
	}

	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	pub fn parse(&self, source: &str) -> Vec<Block> {
		self.parser.parse(source)
	}

	pub fn parse_with_diagnostics(&self, source: &str) -> (Vec<Block>, Vec<ParseDiagnostic>) {
		self.parser.parse_with_diagnostics(source)
	}

	/// Translate `source` into output lines. The first resolver failure
	/// aborts the translation.
	pub fn translate(
		&self,
		source: &str,
		resolver: &impl ContentResolver,
	) -> LitResult<Vec<String>> {
		let mut output = Vec::new();

		for block in self.parse(source) {
			output.extend(self.options.render(&block, resolver)?);
		}

		Ok(output)
	}

	/// Like [`Translator::translate`], joined into one string.
	pub fn translate_to_string(
		&self,
		source: &str,
		resolver: &impl ContentResolver,
	) -> LitResult<String> {
		Ok(self.translate(source, resolver)?.concat())
	}
}

/// Translate `source` with the default [`Translator`].
pub fn translate(source: &str, resolver: &impl ContentResolver) -> LitResult<Vec<String>> {
	Translator::default().translate(source, resolver)
}
