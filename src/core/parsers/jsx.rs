use std::sync::Arc;

use swc_common::{BytePos, FileName, Globals, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax, error::Error as SwcError};

use crate::issues::{ErrorLocation, ExtractionError};

/// A parsed source file together with the source map used to resolve positions.
pub struct ParsedJSX {
    pub module: Module,
    pub source_map: Arc<SourceMap>,
}

impl ParsedJSX {
    /// Resolve a byte position to a 1-based `(line, column)` pair.
    pub fn line_col(&self, pos: BytePos) -> (usize, usize) {
        let loc = self.source_map.lookup_char_pos(pos);
        (loc.line, loc.col_display + 1)
    }
}

/// Parse JS/JSX/TS/TSX source text into a module AST.
///
/// The grammar is always TypeScript with TSX enabled, in module mode, whatever the
/// file extension is. Errors the parser recovers from are reported as failures too,
/// so a file either parses cleanly or yields exactly one parse error.
pub fn parse_jsx_source(code: String, file_path: &str) -> Result<ParsedJSX, ExtractionError> {
    use swc_common::GLOBALS;

    let source_map: Arc<SourceMap> = Default::default();

    // Wrap in GLOBALS.set() for thread safety
    GLOBALS.set(&Globals::new(), || {
        let source_file = source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let syntax = Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        });

        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

        let module = parser
            .parse_module()
            .map_err(|e| to_extraction_error(&e, file_path, &source_map))?;

        if let Some(recovered) = parser.take_errors().into_iter().next() {
            return Err(to_extraction_error(&recovered, file_path, &source_map));
        }

        Ok(ParsedJSX { module, source_map })
    })
}

fn to_extraction_error(error: &SwcError, file_path: &str, source_map: &SourceMap) -> ExtractionError {
    let message = error.kind().msg().to_string();
    let mut result = ExtractionError::parse(file_path, message);

    let span = error.span();
    if span.is_dummy() {
        return result;
    }

    let (location, source_line) = locate(span, file_path, source_map);
    result = result.with_location(location);
    if let Some(line) = source_line {
        result = result.with_code(line);
    }
    result
}

fn locate(span: Span, file_path: &str, source_map: &SourceMap) -> (ErrorLocation, Option<String>) {
    let start = source_map.lookup_char_pos(span.lo);
    let end = source_map.lookup_char_pos(span.hi);
    let source_line = start
        .file
        .get_line(start.line - 1)
        .map(|cow| cow.trim_end().to_string());

    (
        ErrorLocation {
            file_path: file_path.to_string(),
            start_line: start.line,
            start_column: start.col_display + 1,
            end_line: end.line,
            end_column: end.col_display + 1,
        },
        source_line,
    )
}
