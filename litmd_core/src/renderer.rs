use serde::Deserialize;

use crate::Block;
use crate::CodeBlock;
use crate::ContentResolver;
use crate::LitResult;
use crate::indent::remove_indent;

/// Default language tag written after the opening fence.
pub const DEFAULT_FENCE_LANGUAGE: &str = "kotlin";

/// Options that control how blocks become markdown.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RenderOptions {
	/// Language tag for fenced code blocks, e.g. `kotlin` in ```` ```kotlin ````.
	#[serde(default = "default_fence_language")]
	pub fence_language: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			fence_language: default_fence_language(),
		}
	}
}

fn default_fence_language() -> String {
	DEFAULT_FENCE_LANGUAGE.to_string()
}

impl RenderOptions {
	#[must_use]
	pub fn with_fence_language(mut self, language: impl Into<String>) -> Self {
		self.fence_language = language.into();
		self
	}

	/// Render one block to output lines.
	///
	/// Prose passes through untouched, code is de-indented and fenced, and an
	/// include is replaced by whatever `resolver` returns for its path. The
	/// resolved lines are never parsed again, so includes cannot recurse.
	pub fn render(&self, block: &Block, resolver: &impl ContentResolver) -> LitResult<Vec<String>> {
		match block {
			Block::Prose(prose) => Ok(prose.lines().to_vec()),
			Block::Code(code) => Ok(self.render_code(code)),
			Block::Include(directive) => resolver.resolve(&directive.path),
		}
	}

	fn render_code(&self, code: &CodeBlock) -> Vec<String> {
		let mut output = Vec::with_capacity(code.len() + 4);
		output.push("\n".to_string());
		output.push(format!("```{}\n", self.fence_language));
		output.extend(remove_indent(code.lines(), code.minimum_indent()));
		output.push("```\n".to_string());
		output.push("\n".to_string());
		output
	}
}

/// Render one block with the default [`RenderOptions`].
pub fn render(block: &Block, resolver: &impl ContentResolver) -> LitResult<Vec<String>> {
	RenderOptions::default().render(block, resolver)
}
