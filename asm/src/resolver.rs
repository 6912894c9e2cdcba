use crate::error::{Error, LineError};
use crate::parser::label_name;
use crate::source::Line;
use crate::symbol::SymbolTable;

/// First pass: binds every `(LABEL)` to the index of the instruction after it
/// and removes the label lines.
pub fn resolve(lines: Vec<Line>) -> Result<(Vec<Line>, SymbolTable), LineError> {
    let mut table = SymbolTable::new();
    let mut code = Vec::with_capacity(lines.len());

    for line in lines {
        match label_name(line.code()) {
            Some(name) => {
                let pc = u16::try_from(code.len())
                    .map_err(|_| LineError::new(Error::AddressOverflow(name.to_string()), &line))?;
                table
                    .define_label(name, pc, line.no())
                    .map_err(|e| LineError::new(e, &line))?;
            }
            None => code.push(line),
        }
    }

    Ok((code, table))
}
