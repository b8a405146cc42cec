//! Top-level item parsing: programs, functions, parameter lists.

use crate::ast::{FunctionDecl, Item, Parameter, Program};
use crate::{ParseResult, Parser};
use parlc_lex::TokenKind;
use parlc_util::symbol::kw;

impl<'a> Parser<'a> {
    /// program := { function | var_decl } Eof
    ///
    /// Functions and top-level variable declarations interleave freely;
    /// source order is preserved in the item list.
    pub(crate) fn parse_program(&mut self) -> ParseResult<Program> {
        let mut items = Vec::new();

        loop {
            let token = self.peek();
            if token.kind == TokenKind::Eof {
                break;
            }
            if token.lexeme == kw::FUN {
                items.push(Item::Function(self.parse_function()?));
            } else if token.lexeme == kw::LET {
                items.push(Item::Variable(self.parse_variable_decl()?));
            } else {
                return Err(self.unexpected());
            }
        }

        Ok(Program { items })
    }

    /// function := 'fun' IDENT '(' [ params ] ')' '->' type block
    pub(crate) fn parse_function(&mut self) -> ParseResult<FunctionDecl> {
        self.expect_lexeme("fun")?;
        let name = self.expect_identifier()?.lexeme;
        self.expect_lexeme("(")?;
        let params = self.parse_parameters()?;
        self.expect_lexeme(")")?;
        self.expect_lexeme("->")?;
        let return_type = self.parse_type()?;
        let body = self.parse_block()?;

        Ok(FunctionDecl {
            name,
            params,
            return_type,
            body,
        })
    }

    /// params := param { ',' param } where param := IDENT ':' type
    fn parse_parameters(&mut self) -> ParseResult<Vec<Parameter>> {
        let mut params = Vec::new();
        if self.check(")") {
            return Ok(params);
        }

        loop {
            let name = self.expect_identifier()?.lexeme;
            self.expect_lexeme(":")?;
            let ty = self.parse_type()?;
            params.push(Parameter { name, ty });

            if self.check(")") {
                break;
            }
            self.expect_lexeme(",")?;
        }

        Ok(params)
    }
}
