//! Statement parsing.

use crate::ast::{Assignment, Block, BuiltinCall, Stmt, VariableDecl};
use crate::{ParseResult, Parser};
use parlc_lex::TokenKind;
use parlc_util::symbol::kw;

impl<'a> Parser<'a> {
    /// block := '{' { statement } '}'
    pub(crate) fn parse_block(&mut self) -> ParseResult<Block> {
        self.expect_lexeme("{")?;

        let mut statements = Vec::new();
        while !self.check("}") {
            if self.peek().kind == TokenKind::Eof {
                return Err(self.expected("`}`"));
            }
            statements.push(self.parse_statement()?);
        }

        self.expect_lexeme("}")?;
        Ok(Block { statements })
    }

    /// Dispatch on the current token. An identifier needs one extra token
    /// of lookahead: `x = ...` is an assignment, anything else an
    /// expression statement.
    pub(crate) fn parse_statement(&mut self) -> ParseResult<Stmt> {
        let token = self.peek();
        match token.kind {
            TokenKind::Keyword => {
                if token.lexeme == kw::LET {
                    self.parse_variable_decl().map(Stmt::VarDecl)
                } else if token.lexeme == kw::RETURN {
                    self.parse_return()
                } else if token.lexeme == kw::IF {
                    self.parse_if()
                } else if token.lexeme == kw::WHILE {
                    self.parse_while()
                } else if token.lexeme == kw::FOR {
                    self.parse_for()
                } else {
                    Err(self.unexpected())
                }
            }
            TokenKind::Builtin => self.parse_builtin_statement(),
            TokenKind::Identifier => {
                if self.peek_ahead(1).is("=") {
                    self.parse_assignment_statement()
                } else {
                    self.parse_expression_statement()
                }
            }
            _ => Err(self.unexpected()),
        }
    }

    /// var_decl := 'let' IDENT ':' type '=' expression ';'
    pub(crate) fn parse_variable_decl(&mut self) -> ParseResult<VariableDecl> {
        self.expect_lexeme("let")?;
        let name = self.expect_identifier()?.lexeme;
        self.expect_lexeme(":")?;
        let ty = self.parse_type()?;
        self.expect_lexeme("=")?;
        let value = self.parse_expression()?;
        self.expect_lexeme(";")?;

        Ok(VariableDecl { name, ty, value })
    }

    /// assignment := IDENT '=' expression
    ///
    /// The trailing `;` belongs to the caller: the for-loop update has
    /// none.
    fn parse_assignment(&mut self) -> ParseResult<Assignment> {
        let target = self.expect_identifier()?.lexeme;
        self.expect_lexeme("=")?;
        let value = self.parse_expression()?;
        Ok(Assignment { target, value })
    }

    fn parse_assignment_statement(&mut self) -> ParseResult<Stmt> {
        let assignment = self.parse_assignment()?;
        self.expect_lexeme(";")?;
        Ok(Stmt::Assign(assignment))
    }

    /// return := 'return' expression ';'
    fn parse_return(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme("return")?;
        let expression = self.parse_expression()?;
        self.expect_lexeme(";")?;
        Ok(Stmt::Return(expression))
    }

    /// if := 'if' '(' expression ')' block [ 'else' block ]
    fn parse_if(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme("if")?;
        self.expect_lexeme("(")?;
        let condition = self.parse_expression()?;
        self.expect_lexeme(")")?;
        let then_block = self.parse_block()?;

        let else_block = if self.eat("else") {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_block,
            else_block,
        })
    }

    /// while := 'while' '(' expression ')' block
    fn parse_while(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme("while")?;
        self.expect_lexeme("(")?;
        let condition = self.parse_expression()?;
        self.expect_lexeme(")")?;
        let body = self.parse_block()?;

        Ok(Stmt::While { condition, body })
    }

    /// for := 'for' '(' var_decl expression ';' assignment ')' block
    ///
    /// The init declaration consumes its own `;`.
    fn parse_for(&mut self) -> ParseResult<Stmt> {
        self.expect_lexeme("for")?;
        self.expect_lexeme("(")?;
        let init = self.parse_variable_decl()?;
        let condition = self.parse_expression()?;
        self.expect_lexeme(";")?;
        let update = self.parse_assignment()?;
        self.expect_lexeme(")")?;
        let body = self.parse_block()?;

        Ok(Stmt::For {
            init,
            condition,
            update,
            body,
        })
    }

    /// builtin_call := BUILTIN '(' [ expression-list ] ')' ';'
    ///
    /// Parentheses are required; the paren-less form some old fixtures
    /// used is rejected.
    fn parse_builtin_statement(&mut self) -> ParseResult<Stmt> {
        let name = self.bump().lexeme;
        self.expect_lexeme("(")?;
        let args = self.parse_expression_list(")")?;
        self.expect_lexeme(")")?;
        self.expect_lexeme(";")?;

        Ok(Stmt::Builtin(BuiltinCall { name, args }))
    }

    /// expr_stmt := expression ';'
    fn parse_expression_statement(&mut self) -> ParseResult<Stmt> {
        let expression = self.parse_expression()?;
        self.expect_lexeme(";")?;
        Ok(Stmt::Expr(expression))
    }
}
