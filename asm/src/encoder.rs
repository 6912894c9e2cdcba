use arch::{alu::Comp, dest::Dest, inst::Inst, jump::Jump};

use crate::error::Error;
use crate::parser::{Imm, Stmt};
use crate::symbol::SymbolTable;

/// Second pass for a single label-free line: the sixteen-character binary word.
pub fn encode(code: &str, table: &mut SymbolTable) -> Result<String, Error> {
    Ok(lower(code, table)?.to_bin_string())
}

/// Parses `code` into an instruction, allocating a variable for an unseen symbol.
pub fn lower(code: &str, table: &mut SymbolTable) -> Result<Inst, Error> {
    match Stmt::parse(code)? {
        Stmt::Addr(Imm::Literal(v)) => Ok(Inst::A(v)),
        Stmt::Addr(Imm::Ident(name)) => Ok(Inst::A(table.resolve(name)?)),
        Stmt::Comp { dest, comp, jump } => {
            let comp = Comp::parse(comp).ok_or_else(|| Error::UnknownComp(comp.to_string()))?;
            let dest = match dest {
                Some(d) => Dest::parse(d).ok_or_else(|| Error::UnknownDest(d.to_string()))?,
                None => Dest::Null,
            };
            let jump = match jump {
                Some(j) => Jump::parse(j).ok_or_else(|| Error::UnknownJump(j.to_string()))?,
                None => Jump::Null,
            };
            Ok(Inst::C { comp, dest, jump })
        }
    }
}
