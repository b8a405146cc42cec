//! parlc-drv - Driver for the PArL front-end.
//!
//! The driver is a thin consumer of the core crates. It reads a source
//! file and runs the pipeline:
//!
//! ```text
//! source text
//!      |
//!      v
//!  [parlc-lex]  -> token stream        (--emit tokens stops here)
//!      |
//!      v
//!  [parlc-par]  -> AST                 (--emit ast stops here)
//!      |
//!      v
//!  [parlc-sem]  -> symbol table        (default: check)
//! ```
//!
//! Phase errors become coded diagnostics rendered to stderr with the file
//! and source line. The first error of the first failing phase stops the
//! pipeline.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use parlc_lex::{tokenize, Token, TokenKind};
use parlc_par::ast::{Item, Program};
use parlc_par::ParseError;
use parlc_sem::{SemanticError, SymbolTable};
use parlc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::debug;

/// What the driver should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmitType {
    /// Print the token stream and stop.
    Tokens,
    /// Print the AST and stop.
    Ast,
    /// Run the full front-end.
    #[default]
    Check,
}

/// Driver configuration for one invocation.
#[derive(Debug, Clone)]
pub struct Config {
    /// PArL source file to compile.
    pub input: PathBuf,
    /// Stage to stop after.
    pub emit: EmitType,
    /// Echo the configuration before running.
    pub verbose: bool,
}

/// One compiler invocation: configuration plus collected diagnostics.
pub struct Session {
    config: Config,
    handler: Handler,
}

impl Session {
    /// Create a session for the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            handler: Handler::new(),
        }
    }

    /// The diagnostics collected so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.handler
    }

    /// Read the input file, run the front-end, render diagnostics.
    pub fn run(&self) -> Result<()> {
        if self.config.verbose {
            eprintln!("configuration: {:?}", self.config);
        }

        let path = &self.config.input;
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;

        let outcome = self.compile_source(&source);
        self.render_diagnostics();
        outcome
    }

    /// Run the pipeline over already-loaded source text.
    ///
    /// Diagnostics land in the session handler; the result only says
    /// whether the requested stages succeeded.
    pub fn compile_source(&self, source: &str) -> Result<()> {
        debug!(bytes = source.len(), "lexing");
        let tokens = tokenize(source);

        // The lexer itself is total; the driver refuses to go further
        // when it produced error tokens.
        if let Some(error) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
            self.report_lex_error(error);
            bail!("lexing produced errors");
        }

        if self.config.emit == EmitType::Tokens {
            self.print_tokens(&tokens);
            return Ok(());
        }

        debug!(tokens = tokens.len(), "parsing");
        let program = match parlc_par::parse(&tokens) {
            Ok(program) => program,
            Err(error) => {
                self.report_parse_error(&error);
                bail!("parsing failed");
            }
        };

        if self.config.emit == EmitType::Ast {
            self.print_ast(&program);
            return Ok(());
        }

        debug!(items = program.items.len(), "analyzing");
        let table = match parlc_sem::analyze(&program) {
            Ok(table) => table,
            Err(error) => {
                self.report_semantic_error(&error);
                bail!("semantic analysis failed");
            }
        };

        self.print_summary(&program, &table);
        Ok(())
    }

    fn report_lex_error(&self, token: &Token) {
        DiagnosticBuilder::error(format!("unexpected character `{}`", token.lexeme_str()))
            .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
            .span(Span::point(token.line, token.column))
            .emit(&self.handler);
    }

    fn report_parse_error(&self, error: &ParseError) {
        let code = match error {
            ParseError::Expected { .. } => DiagnosticCode::E_PARSER_EXPECTED_TOKEN,
            ParseError::Unexpected { .. } => DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
        };
        DiagnosticBuilder::error(error.to_string())
            .code(code)
            .span(Span::point(error.line(), 1))
            .emit(&self.handler);
    }

    fn report_semantic_error(&self, error: &SemanticError) {
        let code = match error {
            SemanticError::DuplicateDeclaration { .. } => DiagnosticCode::E_SEM_DUPLICATE_DECL,
            SemanticError::Undeclared { .. } => DiagnosticCode::E_SEM_UNDECLARED,
            SemanticError::NotAFunction { .. } => DiagnosticCode::E_SEM_NOT_A_FUNCTION,
        };
        DiagnosticBuilder::error(error.to_string())
            .code(code)
            .emit(&self.handler);
    }

    fn render_diagnostics(&self) {
        for diagnostic in self.handler.diagnostics() {
            if diagnostic.span.line > 0 {
                eprintln!(
                    "{} --> {}:{}",
                    diagnostic,
                    self.config.input.display(),
                    diagnostic.span.line
                );
            } else {
                eprintln!("{diagnostic}");
            }
        }
    }

    fn print_tokens(&self, tokens: &[Token]) {
        for token in tokens {
            println!("{token}");
        }
    }

    fn print_ast(&self, program: &Program) {
        println!("{program:#?}");
    }

    fn print_summary(&self, program: &Program, table: &SymbolTable) {
        let functions = program
            .items
            .iter()
            .filter(|item| matches!(item, Item::Function(_)))
            .count();
        println!(
            "ok: {} top-level item(s) ({} function(s)), {} scope(s)",
            program.items.len(),
            functions,
            table.scopes().count()
        );
    }
}
