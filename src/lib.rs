#![allow(clippy::module_inception)]

use std::rc::Rc;

use tracing::debug;

use crate::errors::errors::{CompileError, ErrorTip};

pub mod ast;
pub mod compiler;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    /// Byte offset into the source
    pub offset: u32,
    /// 1-based line number
    pub line: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(offset: u32, line: u32, file: Rc<String>) -> Self {
        Position { offset, line, file }
    }

    pub fn null() -> Self {
        Position::new(0, 1, Rc::new(String::from("<null>")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Runs the whole pipeline: tokenize, parse, type check and emit C.
pub fn compile_source(source: &str, file: Option<String>) -> Result<String, CompileError> {
    let file_name = file.unwrap_or_else(|| String::from("shell"));

    let tokens = lexer::lexer::tokenize(source.to_string(), Some(file_name.clone()))?;
    debug!(count = tokens.len(), "tokenized");

    let program = parser::parser::parse(tokens, Rc::new(file_name))?;
    debug!(statements = program.statements.len(), "parsed");

    let typed = type_checker::type_checker::type_check(&program)?;
    debug!("type checked");

    Ok(compiler::compiler::generate(&typed))
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source
        .split_inclusive('\n')
        .nth((line - 1) as usize)
        .map(|text| text.trim_end_matches(['\n', '\r']))
}

/// Renders an error the way the command-line driver reports it.
///
/// ```text
/// * [line #2]: undefined variable 'y'
///   |
/// 2 | x = y;
///   |
/// ```
pub fn format_error(error: &CompileError, source: &str) -> String {
    let line = error.get_line();
    let prefix = match line {
        Some(line) => format!("[line #{}]: ", line),
        None => String::new(),
    };

    let mut rendered = format!("* {}{}", prefix, error);

    let tip = match error {
        CompileError::Syntax(error) => error.get_tip(),
        CompileError::Semantic(error) => error.get_tip(),
    };
    if let ErrorTip::Suggestion(tip) = tip {
        rendered.push_str(&format!("\nhelp: {}", tip));
    }

    if let Some(text) = line.and_then(|line| source_line(source, line)) {
        let line_string = line.unwrap_or_default().to_string();
        let padding = line_string.len() + 2;

        rendered.push_str(&format!("\n{:>padding$}", "|"));
        rendered.push_str(&format!("\n{} | {}", line_string, text.trim()));
        rendered.push_str(&format!("\n{:>padding$}", "|"));
    }

    rendered
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_source_line() {
        let source = "Hello, world!\nsecond\n\n    Testing { }\n";
        assert_eq!(super::source_line(source, 1), Some("Hello, world!"));
        assert_eq!(super::source_line(source, 2), Some("second"));
        assert_eq!(super::source_line(source, 3), Some(""));
        assert_eq!(super::source_line(source, 4), Some("    Testing { }"));
        assert_eq!(super::source_line(source, 5), None);
        assert_eq!(super::source_line(source, 0), None);
    }

    #[test]
    fn test_format_error_with_line() {
        let source = "let x: int = 1;\nx = 2;\n";
        let error = super::compile_source(source, None).unwrap_err();
        let rendered = super::format_error(&error, source);

        assert!(rendered.starts_with("* [line #2]: cannot assign to immutable variable 'x'"));
        assert!(rendered.contains("2 | x = 2;"));
    }

    #[test]
    fn test_format_error_semantic_help() {
        let source = "return 1;";
        let error = super::compile_source(source, None).unwrap_err();
        let rendered = super::format_error(&error, source);
        assert!(rendered.contains("\nhelp: move the 'return' into a function body\n"));

        // The immutable hint is part of the message and is not repeated
        let source = "let x: int = 1;\nx = 2;";
        let error = super::compile_source(source, None).unwrap_err();
        assert!(!super::format_error(&error, source).contains("help:"));
    }
}
