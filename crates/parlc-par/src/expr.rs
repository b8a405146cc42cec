//! Expression parsing: the precedence ladder and primaries.
//!
//! One method per precedence level, loosest first. Each binary level loops
//! on its own operators, so everything is left-associative; unary recurses
//! into itself, so prefixes are right-associative.

use crate::ast::{BinOp, Expr, Literal, LiteralKind, UnOp};
use crate::{ParseResult, Parser};
use parlc_lex::TokenKind;
use parlc_util::symbol::kw;

impl<'a> Parser<'a> {
    /// expression := cast
    pub(crate) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_cast()
    }

    /// cast := or { 'as' type }
    fn parse_cast(&mut self) -> ParseResult<Expr> {
        let mut expr = self.parse_or()?;
        while self.eat("as") {
            let target = self.parse_type()?;
            expr = Expr::Cast {
                expr: Box::new(expr),
                target,
            };
        }
        Ok(expr)
    }

    /// or := and { 'or' and }
    fn parse_or(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_and()?;
        while self.eat("or") {
            let right = self.parse_and()?;
            left = Expr::binary(BinOp::Or, left, right);
        }
        Ok(left)
    }

    /// and := equality { 'and' equality }
    fn parse_and(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_equality()?;
        while self.eat("and") {
            let right = self.parse_equality()?;
            left = Expr::binary(BinOp::And, left, right);
        }
        Ok(left)
    }

    /// equality := comparison { ('==' | '!=') comparison }
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;
        loop {
            let op = match self.peek().lexeme_str() {
                "==" => BinOp::Eq,
                "!=" => BinOp::Ne,
                _ => break,
            };
            self.bump();
            let right = self.parse_comparison()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// comparison := term { ('<' | '<=' | '>' | '>=') term }
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.peek().lexeme_str() {
                "<" => BinOp::Lt,
                "<=" => BinOp::Le,
                ">" => BinOp::Gt,
                ">=" => BinOp::Ge,
                _ => break,
            };
            self.bump();
            let right = self.parse_term()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// term := factor { ('+' | '-') factor }
    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_factor()?;
        loop {
            let op = match self.peek().lexeme_str() {
                "+" => BinOp::Add,
                "-" => BinOp::Sub,
                _ => break,
            };
            self.bump();
            let right = self.parse_factor()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// factor := unary { ('*' | '/') unary }
    fn parse_factor(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.peek().lexeme_str() {
                "*" => BinOp::Mul,
                "/" => BinOp::Div,
                _ => break,
            };
            self.bump();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }
        Ok(left)
    }

    /// unary := ('-' | 'not') unary | primary
    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let op = match self.peek().lexeme_str() {
            "-" => Some(UnOp::Neg),
            "not" => Some(UnOp::Not),
            _ => None,
        };
        if let Some(op) = op {
            self.bump();
            let operand = self.parse_unary()?;
            return Ok(Expr::unary(op, operand));
        }
        self.parse_primary()
    }

    /// primary := '(' expression ')' | '[' expression-list ']'
    ///          | (IDENT | BUILTIN) [ '(' expression-list ')' ]
    ///          | INT | FLOAT | BOOL | COLOUR | 'true' | 'false'
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        let token = self.peek();

        if token.is("(") {
            self.bump();
            let expr = self.parse_expression()?;
            self.expect_lexeme(")")?;
            return Ok(expr);
        }

        if token.is("[") {
            self.bump();
            let elements = self.parse_expression_list("]")?;
            self.expect_lexeme("]")?;
            return Ok(Expr::Array(elements));
        }

        match token.kind {
            // A pad builtin in expression position behaves like any other
            // callee; a bare builtin name is an identifier literal.
            TokenKind::Identifier | TokenKind::Builtin => {
                let name = self.bump().lexeme;
                if self.eat("(") {
                    let args = self.parse_expression_list(")")?;
                    self.expect_lexeme(")")?;
                    Ok(Expr::Call { name, args })
                } else {
                    Ok(Expr::Literal(Literal {
                        kind: LiteralKind::Identifier,
                        text: name,
                    }))
                }
            }
            TokenKind::IntLiteral => Ok(self.literal(LiteralKind::Int)),
            TokenKind::FloatLiteral => Ok(self.literal(LiteralKind::Float)),
            TokenKind::BooleanLiteral => Ok(self.literal(LiteralKind::Bool)),
            TokenKind::ColourLiteral => Ok(self.literal(LiteralKind::Colour)),
            TokenKind::Keyword if token.lexeme == kw::TRUE || token.lexeme == kw::FALSE => {
                Ok(self.literal(LiteralKind::Bool))
            }
            _ => Err(self.expected("an expression")),
        }
    }

    /// expression-list := [ expression { ',' expression } ]
    ///
    /// Stops before `terminator` without consuming it.
    pub(crate) fn parse_expression_list(&mut self, terminator: &str) -> ParseResult<Vec<Expr>> {
        let mut items = Vec::new();
        if self.check(terminator) {
            return Ok(items);
        }

        loop {
            items.push(self.parse_expression()?);
            if self.check(terminator) {
                break;
            }
            self.expect_lexeme(",")?;
        }

        Ok(items)
    }

    fn literal(&mut self, kind: LiteralKind) -> Expr {
        let text = self.bump().lexeme;
        Expr::Literal(Literal { kind, text })
    }
}
