use crate::error::Error;

const ADDR_BEGIN: char = '@';
const LABEL_BEGIN: char = '(';
const LABEL_END: char = ')';
const DEST_SEP: char = '=';
const JUMP_SEP: char = ';';

// ----------------------------------------------------------------------------
// Label

/// Name of a `(NAME)` label definition. The name itself is not validated.
pub fn label_name(code: &str) -> Option<&str> {
    code.strip_prefix(LABEL_BEGIN)
        .and_then(|rest| rest.strip_suffix(LABEL_END))
        .filter(|name| !name.is_empty())
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt<'a> {
    /// `@value`
    Addr(Imm<'a>),
    /// `dest=comp;jump`, dest and jump optional
    Comp {
        dest: Option<&'a str>,
        comp: &'a str,
        jump: Option<&'a str>,
    },
}

impl<'a> Stmt<'a> {
    pub fn parse(code: &'a str) -> Result<Stmt<'a>, Error> {
        match code.strip_prefix(ADDR_BEGIN) {
            Some(operand) => Ok(Stmt::Addr(Imm::parse(operand)?)),
            None => {
                let (dest, comp, jump) = split_fields(code)?;
                Ok(Stmt::Comp { dest, comp, jump })
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Immediate

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Imm<'a> {
    Literal(u16),
    Ident(&'a str),
}

impl<'a> Imm<'a> {
    fn parse(s: &'a str) -> Result<Imm<'a>, Error> {
        let operand = || format!("{}{}", ADDR_BEGIN, s);
        match s.chars().next() {
            None => Err(Error::MalformedInstruction(operand())),
            Some(head) if head.is_ascii_digit() => {
                if !s.chars().all(|c| c.is_ascii_digit()) {
                    return Err(Error::InvalidSymbol(s.to_string()));
                }
                match s.parse::<u16>() {
                    Ok(v) if v <= arch::inst::ADDR_MAX => Ok(Imm::Literal(v)),
                    _ => Err(Error::AddressOverflow(s.to_string())),
                }
            }
            Some(_) => {
                if s.chars().all(is_symbol_char) {
                    Ok(Imm::Ident(s))
                } else {
                    Err(Error::InvalidSymbol(s.to_string()))
                }
            }
        }
    }
}

fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '$' | ':')
}

// ----------------------------------------------------------------------------
// Field splitting

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Comp,
    Jump,
}

/// Splits a compute instruction into `(dest, comp, jump)`.
///
/// The first `=` ends the dest field and must come before any `;`.
/// The first `;` starts the jump field. Any further separator, or an empty
/// field next to a separator, makes the instruction malformed.
fn split_fields(code: &str) -> Result<(Option<&str>, &str, Option<&str>), Error> {
    let malformed = || Error::MalformedInstruction(code.to_string());

    let mut field = Field::Comp;
    let mut dest = None;
    let mut comp_start = 0;
    let mut comp_end = code.len();
    let mut jump = None;

    for (i, c) in code.char_indices() {
        match (field, c) {
            (Field::Comp, DEST_SEP) => {
                if dest.is_some() {
                    return Err(malformed());
                }
                dest = Some(&code[..i]);
                comp_start = i + 1;
            }
            (Field::Comp, JUMP_SEP) => {
                comp_end = i;
                jump = Some(&code[i + 1..]);
                field = Field::Jump;
            }
            (Field::Jump, DEST_SEP | JUMP_SEP) => return Err(malformed()),
            _ => {}
        }
    }

    let comp = &code[comp_start..comp_end];
    let empty = |f: Option<&str>| f.map_or(false, str::is_empty);
    if comp.is_empty() || empty(dest) || empty(jump) {
        return Err(malformed());
    }
    Ok((dest, comp, jump))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        assert_eq!(label_name("(LOOP)"), Some("LOOP"));
        assert_eq!(label_name("(ponggame.0)"), Some("ponggame.0"));
        assert_eq!(label_name("()"), None);
        assert_eq!(label_name("(LOOP"), None);
        assert_eq!(label_name("@LOOP"), None);
    }

    #[test]
    fn address_operands() {
        assert_eq!(Stmt::parse("@5").unwrap(), Stmt::Addr(Imm::Literal(5)));
        assert_eq!(Stmt::parse("@0").unwrap(), Stmt::Addr(Imm::Literal(0)));
        assert_eq!(Stmt::parse("@32767").unwrap(), Stmt::Addr(Imm::Literal(32767)));
        assert_eq!(Stmt::parse("@i").unwrap(), Stmt::Addr(Imm::Ident("i")));
        assert_eq!(
            Stmt::parse("@Main.fib$ret:1").unwrap(),
            Stmt::Addr(Imm::Ident("Main.fib$ret:1"))
        );
    }

    #[test]
    fn bad_address_operands() {
        assert!(matches!(Stmt::parse("@32768"), Err(Error::AddressOverflow(_))));
        assert!(matches!(Stmt::parse("@99999999"), Err(Error::AddressOverflow(_))));
        assert!(matches!(Stmt::parse("@"), Err(Error::MalformedInstruction(s)) if s == "@"));
        assert!(matches!(Stmt::parse("@1x"), Err(Error::InvalidSymbol(s)) if s == "1x"));
        assert!(matches!(Stmt::parse("@a-b"), Err(Error::InvalidSymbol(_))));
    }

    macro_rules! test_split {
        ($name:ident, $code:expr, $dest:expr, $comp:expr, $jump:expr) => {
            #[test]
            fn $name() {
                assert_eq!(
                    Stmt::parse($code).unwrap(),
                    Stmt::Comp {
                        dest: $dest,
                        comp: $comp,
                        jump: $jump
                    }
                );
            }
        };
    }

    test_split!(split_comp_only, "D+1", None, "D+1", None);
    test_split!(split_dest_comp, "D=D+1", Some("D"), "D+1", None);
    test_split!(split_comp_jump, "0;JMP", None, "0", Some("JMP"));
    test_split!(split_all, "MD=D-M;JLE", Some("MD"), "D-M", Some("JLE"));

    #[test]
    fn malformed_shapes() {
        for code in ["A=D=M", "D;JGT;JMP", "D;A=JMP", "=D", "D=", "D;", ";JMP", "M=;JMP", ""] {
            assert!(
                matches!(Stmt::parse(code), Err(Error::MalformedInstruction(_))),
                "code: {:?}",
                code
            );
        }
    }
}
