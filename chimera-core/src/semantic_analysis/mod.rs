//! Scope and type checking over a parsed [Program].
//!
//! Every check writes the resolved type of the node it visits, children before parents, and
//! stops at the first violation.

mod declaration;
mod expression;
mod statement;
mod type_check_context;

pub use type_check_context::TypeCheckContext;

use crate::{
    builtins::load_builtins, procedure_table::ProcedureTable, symbol_table::SymbolTable,
};
use chimera_ast::{Program, Token};
use chimera_error::{SemanticError, SemanticErrorKind};
use chimera_types::Type;
use tracing::debug;

pub(crate) type CheckResult<T> = Result<T, SemanticError>;

fn error<T>(kind: SemanticErrorKind, token: &Token) -> CheckResult<T> {
    Err(SemanticError::new(kind, token.clone()))
}

/// Owns the global symbol table and the procedure table of one compilation unit.
#[derive(Clone, Debug)]
pub struct SemanticAnalyzer {
    symbols: SymbolTable,
    procedures: ProcedureTable,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    /// An analyzer whose procedure table holds the builtin catalogue only.
    pub fn new() -> SemanticAnalyzer {
        let mut procedures = ProcedureTable::new();
        load_builtins(&mut procedures);
        SemanticAnalyzer {
            symbols: SymbolTable::new(),
            procedures,
        }
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn procedures(&self) -> &ProcedureTable {
        &self.procedures
    }

    pub fn into_tables(self) -> (SymbolTable, ProcedureTable) {
        (self.symbols, self.procedures)
    }

    pub fn analyze(&mut self, program: &mut Program) -> Result<(), SemanticError> {
        let mut ctx = TypeCheckContext::from_root(&mut self.symbols, &mut self.procedures);
        if let Some(constants) = &mut program.constants {
            declaration::type_check_constant_list(ctx.by_ref(), constants)?;
        }
        if let Some(variables) = &mut program.variables {
            declaration::type_check_variable_list(ctx.by_ref(), variables)?;
        }
        declaration::type_check_procedure_list(ctx.by_ref(), &mut program.procedures)?;
        statement::type_check_statement_list(ctx.by_ref(), &mut program.statements)?;
        program.ty.set(Type::Void);
        debug!(
            globals = self.symbols.len(),
            procedures = self.procedures.user_procedures().count(),
            "semantic analysis finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol_table::{SymbolKind, Value};
    use assert_matches::assert_matches;
    use chimera_ast::{Expr, Statement};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn analyze(input: &str) -> Result<(Program, SemanticAnalyzer), SemanticError> {
        let src: Arc<str> = Arc::from(input);
        let mut program = chimera_parse::parse_program(&src).unwrap_or_else(|err| panic!("{err}"));
        let mut analyzer = SemanticAnalyzer::new();
        analyzer.analyze(&mut program)?;
        Ok((program, analyzer))
    }

    fn analyze_ok(input: &str) -> (Program, SemanticAnalyzer) {
        analyze(input).unwrap_or_else(|err| panic!("{err} at {}", err.line_col()))
    }

    fn analyze_err(input: &str) -> SemanticError {
        match analyze(input) {
            Ok(_) => panic!("expected a semantic error"),
            Err(err) => err,
        }
    }

    #[test]
    fn constants_carry_type_and_value() {
        let (program, analyzer) = analyze_ok(
            r#"const n := 3; s := "hi"; l := {true, false}; program WrInt(n); end;"#,
        );
        let n = analyzer.symbols().get("n").unwrap();
        assert_eq!((n.ty, n.kind), (Type::Int, SymbolKind::Const));
        assert_eq!(n.value, Some(Value::Int(3)));
        assert_eq!(
            analyzer.symbols().get("s").unwrap().value,
            Some(Value::String("hi".into()))
        );
        let l = analyzer.symbols().get("l").unwrap();
        assert_eq!(l.ty, Type::BoolList);
        assert_eq!(l.value, Some(Value::BoolList(vec![true, false])));
        assert_eq!(program.constants.unwrap().declarations[2].ty.get(), Some(Type::BoolList));
    }

    #[test]
    fn variables_start_with_defaults() {
        let (_, analyzer) =
            analyze_ok("var a, b : integer; c : list of string; program a := b; end;");
        let c = analyzer.symbols().get("c").unwrap();
        assert_eq!((c.ty, c.kind, c.position), (Type::StringList, SymbolKind::Var, None));
        assert_eq!(c.value, Some(Value::StringList(vec![String::new()])));
        assert_eq!(analyzer.symbols().get("a").unwrap().value, Some(Value::Int(0)));
    }

    #[test]
    fn empty_list_constant_is_rejected() {
        let err = analyze_err("const e := {}; program end;");
        assert_eq!(err.kind, SemanticErrorKind::EmptyListConstant);
        assert_eq!(err.token.as_str(), "e");
    }

    #[test]
    fn duplicates_are_reported_per_kind() {
        let err = analyze_err("const x := 1; var x : integer; program end;");
        assert_matches!(err.kind, SemanticErrorKind::DuplicatedVariable { ref name } if name == "x");

        let err = analyze_err("const x := 1; x := 2; program end;");
        assert_matches!(err.kind, SemanticErrorKind::DuplicatedConstant { .. });

        let err = analyze_err("procedure P(a : integer; a : string;); begin end; program end;");
        assert_matches!(err.kind, SemanticErrorKind::DuplicatedParameter { ref name } if name == "a");
        assert_eq!(err.line_col().col, 26);

        let err = analyze_err("procedure P(); begin end; procedure P(); begin end; program end;");
        assert_matches!(err.kind, SemanticErrorKind::DuplicateProcedure { ref name } if name == "P");
    }

    #[test]
    fn builtins_cannot_be_redefined() {
        let err = analyze_err("procedure WrLn(); begin end; program end;");
        assert_matches!(err.kind, SemanticErrorKind::BuiltinRedefinition { ref name } if name == "WrLn");
    }

    #[test]
    fn parameters_are_numbered_across_declarations() {
        let (_, analyzer) = analyze_ok(
            "procedure P(a, b : integer; c : list of boolean;) : integer; var t : string; \
             begin return a + b; end; program end;",
        );
        let procedure = analyzer.procedures().get("P").unwrap();
        assert_eq!(procedure.return_type, Type::Int);
        assert!(!procedure.is_builtin);
        assert_eq!(
            procedure.parameters(),
            vec![
                ("a".to_owned(), Type::Int),
                ("b".to_owned(), Type::Int),
                ("c".to_owned(), Type::BoolList)
            ]
        );
        assert_eq!(procedure.symbols.get("t").unwrap().position, None);
    }

    #[test]
    fn recursion_sees_the_procedure_itself() {
        analyze_ok(
            "procedure Fact(n : integer;) : integer; begin \
               if n <= 1 then return 1; end; \
               return n * Fact(n - 1); \
             end; program WrInt(Fact(5)); end;",
        );
    }

    #[test]
    fn locals_shadow_globals() {
        let (program, analyzer) = analyze_ok(
            "var x : integer; procedure P(x : string;); begin WrStr(x); end; \
             program WrInt(x); end;",
        );
        assert_eq!(analyzer.symbols().get("x").unwrap().ty, Type::Int);
        let p = analyzer.procedures().get("P").unwrap();
        assert_eq!(p.symbols.get("x").unwrap().ty, Type::String);
        let Statement::Call(call) = &program.statements.statements[0] else {
            panic!("expected a call statement")
        };
        assert_eq!(call.args[0].ty(), Some(Type::Int));
    }

    #[test]
    fn globals_are_visible_in_procedures() {
        analyze_ok("const limit := 10; procedure P(); begin WrInt(limit); end; program P(); end;");
    }

    #[test]
    fn undeclared_names() {
        let err = analyze_err("program y := 1; end;");
        assert_matches!(err.kind, SemanticErrorKind::UndeclaredVariable { ref name } if name == "y");

        let err = analyze_err("program Foo(); end;");
        assert_matches!(err.kind, SemanticErrorKind::UndeclaredProcedure { ref name } if name == "Foo");
        assert_eq!(err.token.as_str(), "Foo");
    }

    #[test]
    fn call_arity_and_argument_types() {
        let err = analyze_err("program WrInt(1, 2); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::WrongArgumentCount {
                expected: 1,
                found: 2
            }
        );

        let err = analyze_err("program WrInt(\"one\"); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::IncompatibleArgument {
                parameter: "i".into(),
                expected: Type::Int,
                found: Type::String,
            }
        );
        assert_eq!(err.token.as_str(), "\"one\"");
    }

    #[test]
    fn empty_list_flows_into_list_parameters() {
        let (program, _) = analyze_ok("program WrInt(LenLstInt({})); end;");
        let Statement::Call(call) = &program.statements.statements[0] else {
            panic!("expected a call statement")
        };
        assert_eq!(call.ty.get(), Some(Type::Void));
        let Expr::Call(inner) = &call.args[0] else {
            panic!("expected a nested call")
        };
        assert_eq!(inner.ty.get(), Some(Type::Int));
        assert_eq!(inner.args[0].ty(), Some(Type::List));

        let err = analyze_err("program WrInt(LenLstInt({true})); end;");
        assert_matches!(err.kind, SemanticErrorKind::IncompatibleArgument { found: Type::BoolList, .. });
    }

    #[test]
    fn assignments() {
        analyze_ok("var l : list of integer; program l := {}; l := {1, 2}; l[0] := 3; end;");

        let err = analyze_err("var b : boolean; program b := 1; end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::IncompatibleAssignment {
                target: Type::Bool,
                value: Type::Int
            }
        );
        assert_eq!(err.token.as_str(), ":=");

        let err = analyze_err("const c := 1; program c := 2; end;");
        assert_matches!(err.kind, SemanticErrorKind::AssignmentToConstant { ref name } if name == "c");

        let err = analyze_err("const c := {1, 2}; program c[0] := 2; end;");
        assert_matches!(err.kind, SemanticErrorKind::AssignmentToConstant { .. });
    }

    #[test]
    fn conditions_must_be_boolean() {
        analyze_ok("var x : integer; program if x = 1 then elseif x > 2 then else end; end;");

        let err = analyze_err("program if 1 then end; end;");
        assert_eq!(err.kind, SemanticErrorKind::NonBooleanCondition { found: Type::Int });
        assert_eq!(err.token.as_str(), "if");

        let err = analyze_err("program if true then elseif \"s\" then end; end;");
        assert_eq!(err.token.as_str(), "elseif");
    }

    #[test]
    fn for_loops() {
        let (_, analyzer) =
            analyze_ok("var i : integer; program for i in {1, 2, 3} do WrInt(i); end; end;");
        let hidden = analyzer.symbols().get("__i_index").unwrap();
        assert_eq!((hidden.ty, hidden.kind), (Type::Int, SymbolKind::Var));

        let err = analyze_err("var s : string; program for s in {1} do end; end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::IncompatibleForTypes {
                variable: Type::String,
                list: Type::IntList
            }
        );
        assert_eq!(err.token.as_str(), "s");
    }

    #[test]
    fn hidden_index_lives_in_the_procedure_scope() {
        let (_, analyzer) = analyze_ok(
            "procedure P(l : list of boolean;); var b : boolean; \
             begin for b in l do end; end; program end;",
        );
        assert!(analyzer.symbols().get("__b_index").is_none());
        let p = analyzer.procedures().get("P").unwrap();
        assert!(p.symbols.contains("__b_index"));
    }

    #[test]
    fn exit_only_inside_loops() {
        analyze_ok("program loop if true then exit; end; end; end;");
        analyze_ok("var x : integer; program for x in {1} do loop exit; end; exit; end; end;");

        let err = analyze_err("program exit; end;");
        assert_eq!(err.kind, SemanticErrorKind::UnexpectedExit);
        assert_eq!(err.line_col().col, 9);

        let err = analyze_err("procedure P(); begin exit; end; program loop P(); end; end;");
        assert_eq!(err.kind, SemanticErrorKind::UnexpectedExit);
    }

    #[test]
    fn returns() {
        analyze_ok("procedure P(); begin return; end; program end;");
        analyze_ok("procedure P() : list of integer; begin return {}; end; program end;");

        let err = analyze_err("program return; end;");
        assert_eq!(err.kind, SemanticErrorKind::UnexpectedReturn);

        let err = analyze_err("procedure P() : integer; begin return; end; program end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::InvalidReturnType {
                expected: Type::Int,
                found: Type::Void
            }
        );

        let err = analyze_err("procedure P(); begin return 1; end; program end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::InvalidReturnType {
                expected: Type::Void,
                found: Type::Int
            }
        );
    }

    #[test]
    fn operators() {
        analyze_ok(
            "var b : boolean; i : integer; program \
             b := (i + 1) * 2 div 3 rem 4 >= -i and not b xor b = true or i <> 2; end;",
        );

        let err = analyze_err("program WrBool(1 and true); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::BinaryOperandMismatch {
                operator: "and".into(),
                expected: Type::Bool
            }
        );

        let err = analyze_err("program WrInt(1 + false); end;");
        assert_eq!(err.token.as_str(), "+");

        let err = analyze_err("program WrBool(\"a\" = \"a\"); end;");
        assert_eq!(err.kind, SemanticErrorKind::EqualityOperandMismatch { operator: "=".into() });

        let err = analyze_err("program WrBool(true <> 1); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::BinaryOperandMismatch {
                operator: "<>".into(),
                expected: Type::Bool
            }
        );

        let err = analyze_err("program WrBool(not 1); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::UnaryOperandMismatch {
                operator: "not".into(),
                expected: Type::Bool
            }
        );

        let err = analyze_err("program WrInt(-true); end;");
        assert_matches!(err.kind, SemanticErrorKind::UnaryOperandMismatch { expected: Type::Int, .. });
    }

    #[test]
    fn indexing() {
        analyze_ok("var l : list of string; program WrStr(l[LenLstStr(l) - 1]); end;");

        let err = analyze_err("var l : list of string; program WrStr(l[true]); end;");
        assert_eq!(err.kind, SemanticErrorKind::NonIntegerIndex { found: Type::Bool });
        assert_eq!(err.token.as_str(), "true");

        let err = analyze_err("var s : string; program WrStr(s[0]); end;");
        assert_eq!(err.kind, SemanticErrorKind::IndexNonList { found: Type::String });
        assert_eq!(err.token.as_str(), "[");
    }

    #[test]
    fn list_literals() {
        let err = analyze_err("program WrInt(LenLstInt({1, true})); end;");
        assert_eq!(
            err.kind,
            SemanticErrorKind::HeterogeneousList {
                expected: Type::Int,
                found: Type::Bool
            }
        );
        assert_eq!(err.token.as_str(), "true");
    }

    #[test]
    fn integer_literal_range() {
        analyze_ok("program WrInt(2147483647); end;");
        let err = analyze_err("program WrInt(2147483648); end;");
        assert_matches!(
            err.kind,
            SemanticErrorKind::IntegerLiteralTooLarge { ref literal } if literal == "2147483648"
        );
    }
}
