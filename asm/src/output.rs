use crate::error::Error;
use crate::symbol::SymbolTable;
use std::io::Write;
use std::path::{Path, PathBuf};

const HACK_EXTENSION: &str = "hack";

/// `dir/Prog.asm` -> `dir/Prog.hack`
pub fn hack_path(input: &str) -> String {
    let path: PathBuf = Path::new(input).with_extension(HACK_EXTENSION);
    path.to_string_lossy().to_string()
}

pub fn write_hack(path: &str, words: &[String]) -> Result<(), Error> {
    let file = std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    let mut out = std::io::BufWriter::new(file);
    for word in words {
        writeln!(out, "{}", word).map_err(|e| Error::FileWrite(path.to_string(), e))?;
    }
    out.flush()
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

pub fn write_symbols(path: &str, table: &SymbolTable) -> Result<(), Error> {
    let yaml = serde_yaml::to_string(table).map_err(Error::SymbolMap)?;
    std::fs::write(path, yaml).map_err(|e| Error::FileWrite(path.to_string(), e))
}
