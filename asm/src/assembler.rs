use arch::inst::Inst;
use color_print::cprintln;

use crate::encoder::lower;
use crate::error::LineError;
use crate::resolver::resolve;
use crate::source::Line;
use crate::symbol::SymbolTable;

/// A fully assembled program. `code[i]` was encoded to `insts[i]`, which sits
/// at ROM address `i`.
#[derive(Debug)]
pub struct Program {
    pub code: Vec<Line>,
    pub insts: Vec<Inst>,
    pub symbols: SymbolTable,
}

impl Program {
    pub fn words(&self) -> Vec<String> {
        self.insts.iter().map(Inst::to_bin_string).collect()
    }
}

/// Runs both passes. The symbol table built by the first pass is moved into
/// the second and ends up in the returned program.
pub fn assemble(lines: Vec<Line>, verbose: bool) -> Result<Program, LineError> {
    let (code, mut symbols) = resolve(lines)?;

    let mut insts = Vec::with_capacity(code.len());
    for line in &code {
        let known = symbols.len();
        let inst = lower(line.code(), &mut symbols).map_err(|e| LineError::new(e, line))?;
        if verbose {
            cprintln!(
                "  <dim>{:>5}</> {:<24} -> {}",
                line.no(),
                line.code(),
                inst.to_bin_string()
            );
            if symbols.len() > known {
                if let Some((name, symbol)) = symbols.iter().last() {
                    cprintln!("        <c>+ {} = {}</>", name, symbol.value);
                }
            }
        }
        insts.push(inst);
    }

    Ok(Program {
        code,
        insts,
        symbols,
    })
}

/// Assembles source text straight to binary words.
pub fn assemble_str(text: &str) -> Result<Vec<String>, LineError> {
    Ok(assemble(crate::source::parse(text), false)?.words())
}
