use crate::source::Line;
use color_print::cprintln;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Address out of range: `{0}` does not fit in 15 bits")]
    AddressOverflow(String),

    #[error("Invalid symbol: `{0}`")]
    InvalidSymbol(String),

    #[error("Unknown computation: `{0}`")]
    UnknownComp(String),

    #[error("Unknown destination: `{0}`")]
    UnknownDest(String),

    #[error("Unknown jump: `{0}`")]
    UnknownJump(String),

    #[error("Malformed instruction: `{0}`")]
    MalformedInstruction(String),

    #[error("Re-defined label: `{0}`")]
    RedefinedLabel(String, Option<usize>),

    #[error("Expected an .asm file: {0}")]
    InvalidExtension(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read line")]
    FileRead(#[source] std::io::Error),

    #[error("Failed to create file: {0}")]
    FileCreate(String, #[source] std::io::Error),

    #[error("Failed to write file: {0}")]
    FileWrite(String, #[source] std::io::Error),

    #[error("Failed to serialize symbol table")]
    SymbolMap(#[source] serde_yaml::Error),
}

impl Error {
    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, line: &Line) {
        cprintln!("<red,bold>error</>: {}", self);
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line.no());
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line.no(), line.raw());
        cprintln!("      <blue>|</>");

        if let Error::RedefinedLabel(_, Some(prev)) = self {
            cprintln!(
                "<green,bold>note</>: already defined at <underline>{}:{}</>",
                file,
                prev
            );
        }
    }

    /// Print an error that is not tied to a source line
    pub fn print(&self) {
        cprintln!("<red,bold>error</>: {}", self);
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            cprintln!("  <blue>caused by</>: {}", cause);
            source = std::error::Error::source(cause);
        }
    }
}

/// An error raised while processing a particular source line.
#[derive(Error, Debug)]
#[error("line {}: {error}", .line.no())]
pub struct LineError {
    #[source]
    pub error: Error,
    pub line: Line,
}

impl LineError {
    pub fn new(error: Error, line: &Line) -> Self {
        LineError {
            error,
            line: line.clone(),
        }
    }

    pub fn print_diag(&self, file: &str) {
        self.error.print_diag(file, &self.line);
    }
}
