//! The semantic analyzer: an AST walk with scope push/pop.

use crate::scope::{ScopeKind, SymbolInfo, SymbolKind, SymbolTable};
use crate::SemanticError;
use parlc_lex::token::is_builtin;
use parlc_par::ast::{
    Assignment, Block, Expr, FunctionDecl, Item, Literal, LiteralKind, Program, Stmt, VariableDecl,
};
use parlc_util::Symbol;

/// Walks a borrowed AST and builds the symbol table.
///
/// The analyzer halts at the first error; no partial table is returned.
/// It never mutates the AST.
pub struct SemanticAnalyzer {
    table: SymbolTable,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
        }
    }

    /// Analyze a whole program, consuming the analyzer.
    ///
    /// Items are processed in source order, so a name is only visible to
    /// the items after it.
    pub fn analyze(mut self, program: &Program) -> Result<SymbolTable, SemanticError> {
        for item in &program.items {
            match item {
                Item::Function(func) => self.analyze_function(func)?,
                Item::Variable(decl) => self.analyze_variable_decl(decl)?,
            }
        }
        Ok(self.table)
    }

    fn analyze_function(&mut self, func: &FunctionDecl) -> Result<(), SemanticError> {
        self.table.declare(
            func.name,
            SymbolInfo::new(SymbolKind::Function, func.return_type),
        )?;

        // Parameters share the body's scope: `let x` in the body clashes
        // with a parameter named `x`. Nested blocks still shadow freely.
        // They are plain variable bindings carrying the parameter type.
        self.table.enter_scope(ScopeKind::Function);
        for param in &func.params {
            self.table
                .declare(param.name, SymbolInfo::new(SymbolKind::Variable, param.ty))?;
        }
        for stmt in &func.body.statements {
            self.analyze_stmt(stmt)?;
        }
        self.table.exit_scope();

        Ok(())
    }

    fn analyze_variable_decl(&mut self, decl: &VariableDecl) -> Result<(), SemanticError> {
        // The initializer is checked before the new name becomes visible.
        self.analyze_expr(&decl.value)?;
        self.table
            .declare(decl.name, SymbolInfo::new(SymbolKind::Variable, decl.ty))
    }

    fn analyze_block(&mut self, block: &Block) -> Result<(), SemanticError> {
        self.table.enter_scope(ScopeKind::Block);
        for stmt in &block.statements {
            self.analyze_stmt(stmt)?;
        }
        self.table.exit_scope();
        Ok(())
    }

    fn analyze_stmt(&mut self, stmt: &Stmt) -> Result<(), SemanticError> {
        match stmt {
            Stmt::VarDecl(decl) => self.analyze_variable_decl(decl),
            Stmt::Assign(assignment) => self.analyze_assignment(assignment),
            Stmt::Return(expr) => self.analyze_expr(expr),
            Stmt::If {
                condition,
                then_block,
                else_block,
            } => {
                self.analyze_expr(condition)?;
                self.analyze_block(then_block)?;
                if let Some(else_block) = else_block {
                    self.analyze_block(else_block)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                self.analyze_expr(condition)?;
                self.analyze_block(body)
            }
            Stmt::For {
                init,
                condition,
                update,
                body,
            } => {
                // The loop variable lives in a scope wrapping the header
                // and body, and goes away with the loop.
                self.table.enter_scope(ScopeKind::Block);
                self.analyze_variable_decl(init)?;
                self.analyze_expr(condition)?;
                self.analyze_assignment(update)?;
                self.analyze_block(body)?;
                self.table.exit_scope();
                Ok(())
            }
            Stmt::Builtin(call) => self.analyze_args(&call.args),
            Stmt::Expr(expr) => self.analyze_expr(expr),
        }
    }

    fn analyze_assignment(&mut self, assignment: &Assignment) -> Result<(), SemanticError> {
        if self.table.lookup(assignment.target).is_none() {
            return Err(SemanticError::Undeclared {
                name: assignment.target.as_str().to_string(),
            });
        }
        self.analyze_expr(&assignment.value)
    }

    fn analyze_expr(&mut self, expr: &Expr) -> Result<(), SemanticError> {
        match expr {
            Expr::Binary { left, right, .. } => {
                self.analyze_expr(left)?;
                self.analyze_expr(right)
            }
            Expr::Unary { operand, .. } => self.analyze_expr(operand),
            Expr::Cast { expr, .. } => self.analyze_expr(expr),
            Expr::Call { name, args } => self.analyze_call(*name, args),
            Expr::Array(elements) => self.analyze_args(elements),
            Expr::Literal(literal) => self.analyze_literal(literal),
        }
    }

    fn analyze_call(&mut self, name: Symbol, args: &[Expr]) -> Result<(), SemanticError> {
        // Pad builtins are implicitly declared and skip the table.
        if !is_builtin(name) {
            match self.table.lookup(name) {
                None => {
                    return Err(SemanticError::Undeclared {
                        name: name.as_str().to_string(),
                    })
                }
                Some(info) if info.kind != SymbolKind::Function => {
                    return Err(SemanticError::NotAFunction {
                        name: name.as_str().to_string(),
                    })
                }
                Some(_) => {}
            }
        }
        self.analyze_args(args)
    }

    fn analyze_args(&mut self, args: &[Expr]) -> Result<(), SemanticError> {
        for arg in args {
            self.analyze_expr(arg)?;
        }
        Ok(())
    }

    fn analyze_literal(&mut self, literal: &Literal) -> Result<(), SemanticError> {
        if literal.kind == LiteralKind::Identifier && self.table.lookup(literal.text).is_none() {
            return Err(SemanticError::Undeclared {
                name: literal.text.as_str().to_string(),
            });
        }
        Ok(())
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
