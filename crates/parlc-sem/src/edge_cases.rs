//! Edge case tests for parlc-sem.

#[cfg(test)]
mod tests {
    use crate::{analyze, ScopeKind, SemanticError, SymbolTable};
    use parlc_lex::tokenize;
    use parlc_par::ast::Program;
    use parlc_par::parse;
    use parlc_util::Symbol;

    fn analyze_src(source: &str) -> Result<SymbolTable, SemanticError> {
        let program = parse(&tokenize(source)).expect("test source must parse");
        analyze(&program)
    }

    #[test]
    fn test_edge_empty_program() {
        let table = analyze(&Program { items: Vec::new() }).unwrap();
        assert!(table.scope(SymbolTable::GLOBAL).is_empty());
        assert_eq!(table.scopes().count(), 1);
    }

    #[test]
    fn test_edge_sibling_scopes_do_not_leak() {
        // `a` from the then-block must not be visible in the else-block.
        let src = "fun g(c:bool)->int {
            if (c) { let a:int = 1; __print(a); } else { return a; }
            return 0;
        }";
        let err = analyze_src(src).unwrap_err();
        assert_eq!(
            err,
            SemanticError::Undeclared {
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_function_name_visible_inside_itself() {
        // The function is declared in the enclosing scope before its body
        // is analyzed, so recursion resolves.
        let src = "fun fact(n:int)->int {
            if (n <= 1) { return 1; }
            return n * fact(n - 1);
        }";
        assert!(analyze_src(src).is_ok());
    }

    #[test]
    fn test_edge_duplicate_parameters() {
        let err = analyze_src("fun g(a:int, a:int)->int { return a; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::DuplicateDeclaration {
                name: "a".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_function_and_global_variable_clash() {
        let err = analyze_src("let f:int = 1; fun f()->int { return 1; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::DuplicateDeclaration {
                name: "f".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_param_may_shadow_global() {
        let src = "let x:int = 1;
                   fun g(x:int)->int { return x; }";
        assert!(analyze_src(src).is_ok());
    }

    #[test]
    fn test_edge_array_elements_are_checked() {
        let err = analyze_src("fun g()->int { let a:int = [1, missing]; return 0; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::Undeclared {
                name: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_builtin_arguments_are_checked() {
        let err = analyze_src("fun g()->int { __print(missing); return 0; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::Undeclared {
                name: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_cast_operand_is_checked() {
        let err = analyze_src("fun g()->float { return missing as float; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::Undeclared {
                name: "missing".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_bare_builtin_name_is_not_a_value() {
        // Without call parentheses a builtin name is just an undeclared
        // identifier.
        let err = analyze_src("fun g()->int { return __width; }").unwrap_err();
        assert_eq!(
            err,
            SemanticError::Undeclared {
                name: "__width".to_string(),
            }
        );
    }

    #[test]
    fn test_edge_scope_kinds_recorded() {
        let src = "fun g(x:int)->int {
            while (x > 0) { x = x - 1; }
            return x;
        }";
        let table = analyze_src(src).unwrap();
        let kinds: Vec<_> = table.scopes().map(|(_, scope)| scope.kind()).collect();
        assert_eq!(
            kinds,
            vec![ScopeKind::Global, ScopeKind::Function, ScopeKind::Block]
        );
    }

    #[test]
    fn test_edge_cursor_back_at_global_after_analysis() {
        let table = analyze_src("fun g()->int { return 1; }").unwrap();
        assert_eq!(table.current_scope(), SymbolTable::GLOBAL);
        assert!(table
            .lookup(Symbol::intern("g"))
            .is_some());
    }
}
