//! `litmd_core` turns literate source files into markdown. Prose lives in
//! block comments, listings live between code fence comments, and shared
//! snippets are pulled in with include directives:
//!
//! ```text
//! /*-
//! This line is prose and passes through to the book.
//! -*/
//!
//! //`
//! fun shown() = "this code is fenced in the book"
//! //`
//!
//! //#include "notes.md"
//! ```
//!
//! ## Processing Pipeline
//!
//! ```text
//! Source text
//!   -> Lexer (classifies each line by its first non-space characters)
//!   -> Parser (Outside / InProse / InCode state machine, emits Blocks)
//!   -> Renderer (prose verbatim, code de-indented and fenced, includes resolved)
//!   -> Book (sorted source files in a directory, concatenated into one document)
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading from `litmd.toml`.
//! - [`book`] - Source discovery, multi-file translation, and output checks.
//! - [`indent`] - Minimum-indent removal for code listings.
//!
//! ## Key Types
//!
//! - [`Block`] - A parsed prose region, code region, or include directive.
//! - [`Parser`] - Reusable line-oriented parser.
//! - [`RenderOptions`] - Controls how blocks become markdown.
//! - [`ContentResolver`] - Supplies the lines behind an include path.
//! - [`Translator`] - Parser and renderer bundled for repeated use.
//!
//! ## Quick Start
//!
//! ```rust
//! use litmd_core::LitResult;
//! use litmd_core::Translator;
//!
//! let source = "/*-\nHello\n-*/\n//#include \"notes.txt\"\n";
//! let resolver = |_path: &str| -> LitResult<Vec<String>> { Ok(vec!["notes\n".to_string()]) };
//!
//! let lines = Translator::default().translate(source, &resolver).unwrap();
//! assert_eq!(lines, vec!["Hello\n", "notes\n"]);
//! ```

pub use block::*;
pub use config::*;
pub use error::*;
pub use parser::*;
pub use renderer::*;
pub use resolver::*;
pub use translator::*;

mod block;
pub mod book;
pub mod config;
#[allow(unused_assignments)]
mod error;
pub mod indent;
pub(crate) mod lexer;
mod parser;
mod renderer;
mod resolver;
mod translator;

#[cfg(test)]
mod __fixtures;
