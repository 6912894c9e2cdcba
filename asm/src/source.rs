use crate::error::Error;
use std::io::{BufRead, BufReader};
use std::path::Path;

const COMMENT_BEGIN: &str = "//";
const ASM_EXTENSION: &str = "asm";

// ----------------------------------------------------------------------------
// Line

/// One source line: where it came from, what it said, and the code left
/// after comments and whitespace are stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    idx: usize,
    raw: String,
    code: String,
}

impl Line {
    pub fn new(idx: usize, raw: &str) -> Self {
        let code = match raw.split_once(COMMENT_BEGIN) {
            Some((code, _comment)) => code,
            None => raw,
        };
        Self {
            idx,
            raw: raw.to_string(),
            code: code.chars().filter(|c| !c.is_whitespace()).collect(),
        }
    }

    /// 1-based line number.
    pub fn no(&self) -> usize {
        self.idx + 1
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_blank(&self) -> bool {
        self.code.is_empty()
    }
}

// ----------------------------------------------------------------------------
// Reading

pub fn parse(text: &str) -> Vec<Line> {
    text.lines()
        .enumerate()
        .map(|(idx, raw)| Line::new(idx, raw))
        .filter(|line| !line.is_blank())
        .collect()
}

pub fn read(path: &str) -> Result<Vec<Line>, Error> {
    let is_asm = Path::new(path)
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case(ASM_EXTENSION));
    if !is_asm {
        return Err(Error::InvalidExtension(path.to_string()));
    }

    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    let mut lines = vec![];
    for (idx, raw) in BufReader::new(file).lines().enumerate() {
        let line = Line::new(idx, &raw.map_err(Error::FileRead)?);
        if !line.is_blank() {
            lines.push(line);
        }
    }
    Ok(lines)
}
