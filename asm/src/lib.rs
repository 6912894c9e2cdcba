pub mod assembler;
pub mod dump;
pub mod encoder;
pub mod error;
pub mod output;
pub mod parser;
pub mod resolver;
pub mod source;
pub mod symbol;
