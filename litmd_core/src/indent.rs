//! Leading-whitespace normalization for code blocks.

/// Returns true when the line holds nothing but whitespace (its terminator
/// included).
pub fn is_blank(line: &str) -> bool {
	line.trim().is_empty()
}

/// Width of the leading whitespace of a line, counted in characters. Blank
/// lines have no opinion on indentation and return `None`.
pub fn indent_width(line: &str) -> Option<usize> {
	if is_blank(line) {
		return None;
	}

	line.chars().position(|c| !c.is_whitespace())
}

/// The smallest indent across the non-blank lines, or `0` when every line is
/// blank or there are no lines at all.
pub fn minimum_indent<S: AsRef<str>>(lines: &[S]) -> usize {
	lines
		.iter()
		.filter_map(|line| indent_width(line.as_ref()))
		.min()
		.unwrap_or(0)
}

/// Remove `width` leading characters from `line`. Lines shorter than `width`
/// are returned unchanged. A line exactly `width` characters long, terminator
/// included, becomes empty, so a short blank line inside an indented listing
/// loses its newline too.
pub fn strip_indent(line: &str, width: usize) -> &str {
	match line.char_indices().nth(width) {
		Some((offset, _)) => &line[offset..],
		None if line.chars().count() == width => "",
		None => line,
	}
}

/// Remove the minimum common indent from every line, blank lines included.
pub fn remove_minimum_indent<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
	let width = minimum_indent(lines);
	remove_indent(lines, width)
}

pub(crate) fn remove_indent<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<String> {
	lines
		.iter()
		.map(|line| strip_indent(line.as_ref(), width).to_string())
		.collect()
}
