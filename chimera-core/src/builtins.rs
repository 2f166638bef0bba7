//! The runtime library signatures every compilation unit starts with.

use crate::{
    procedure_table::{Procedure, ProcedureTable},
    symbol_table::{Register, SymbolTable},
};
use chimera_types::Type;

pub struct Builtin {
    pub name: &'static str,
    pub parameters: &'static [(&'static str, Type)],
    pub return_type: Type,
}

macro_rules! builtin {
    ($name:literal ( $($param:literal : $ty:ident),* ) -> $ret:ident) => {
        Builtin {
            name: $name,
            parameters: &[$(($param, Type::$ty)),*],
            return_type: Type::$ret,
        }
    };
}

pub const BUILTINS: &[Builtin] = &[
    builtin!("WrInt"("i": Int) -> Void),
    builtin!("WrStr"("s": String) -> Void),
    builtin!("WrBool"("b": Bool) -> Void),
    builtin!("WrLn"() -> Void),
    builtin!("RdInt"() -> Int),
    builtin!("RdStr"() -> String),
    builtin!("AtStr"("s": String, "i": Int) -> String),
    builtin!("LenStr"("s": String) -> Int),
    builtin!("CmpStr"("s1": String, "s2": String) -> Int),
    builtin!("CatStr"("s1": String, "s2": String) -> String),
    builtin!("LenLstInt"("loi": IntList) -> Int),
    builtin!("LenLstStr"("los": StringList) -> Int),
    builtin!("LenLstBool"("lob": BoolList) -> Int),
    builtin!("NewLstInt"("size": Int) -> IntList),
    builtin!("NewLstStr"("size": Int) -> StringList),
    builtin!("NewLstBool"("size": Int) -> BoolList),
    builtin!("IntToStr"("i": Int) -> String),
    builtin!("StrToInt"("s": String) -> Int),
];

impl Builtin {
    pub fn to_procedure(&self) -> Procedure {
        let mut symbols = SymbolTable::new();
        for (position, (name, ty)) in self.parameters.iter().enumerate() {
            symbols.insert(*name, Register::parameter(*ty, position));
        }
        Procedure {
            return_type: self.return_type,
            is_builtin: true,
            symbols,
        }
    }
}

/// Registers every builtin in `procedures`.
pub fn load_builtins(procedures: &mut ProcedureTable) {
    for builtin in BUILTINS {
        procedures.insert(builtin.name, builtin.to_procedure());
    }
}
