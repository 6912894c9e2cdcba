use crate::{alu::Comp, dest::Dest, jump::Jump};

use color_print::cformat;
use std::fmt::Display;

/// Largest value an A-instruction can carry.
pub const ADDR_MAX: u16 = 0x7FFF;

const C_PREFIX: u16 = 0b111 << 13;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inst {
    A(u16),
    C { comp: Comp, dest: Dest, jump: Jump },
}

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match *self {
            Inst::A(addr) => addr & ADDR_MAX,
            Inst::C { comp, dest, jump } => {
                C_PREFIX | (comp.bits() << 6) | (dest.bits() << 3) | jump.bits()
            }
        }
    }

    /// The word as sixteen `0`/`1` characters, most significant bit first.
    pub fn to_bin_string(&self) -> String {
        format!("{:016b}", self.to_bin())
    }
}

impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Inst::A(addr) => write!(f, "@{}", addr),
            Inst::C { comp, dest, jump } => {
                if *dest != Dest::Null {
                    write!(f, "{}=", dest)?;
                }
                write!(f, "{}", comp)?;
                if *jump != Jump::Null {
                    write!(f, ";{}", jump)?;
                }
                Ok(())
            }
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::A(addr) => cformat!("<r>@</><y>{}</>", addr),
            Inst::C { comp, dest, jump } => {
                let dest = match dest {
                    Dest::Null => String::new(),
                    d => cformat!("<b>{}</>=", d),
                };
                let jump = match jump {
                    Jump::Null => String::new(),
                    j => cformat!(";<r>{}</>", j),
                };
                cformat!("{}<g>{}</>{}", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alu::Alu;

    macro_rules! test_inst {
        ($name:ident, $inst:expr, $bin:expr) => {
            #[test]
            fn $name() {
                let inst = $inst;
                assert_eq!(inst.to_bin_string(), $bin, "inst: {}", inst);
            }
        };
    }

    test_inst!(test_a_literal, Inst::A(5), "0000000000000101");
    test_inst!(test_a_max, Inst::A(ADDR_MAX), "0111111111111111");
    test_inst!(
        test_d_eq_d_plus_one,
        Inst::C {
            comp: Comp::new(Alu::DPlusOne, false),
            dest: Dest::D,
            jump: Jump::Null,
        },
        "1110011111010000"
    );
    test_inst!(
        test_zero_jmp,
        Inst::C {
            comp: Comp::new(Alu::Zero, false),
            dest: Dest::Null,
            jump: Jump::JMP,
        },
        "1110101010000111"
    );
    test_inst!(
        test_md_eq_d_minus_m_jle,
        Inst::C {
            comp: Comp::new(Alu::DMinusA, true),
            dest: Dest::MD,
            jump: Jump::JLE,
        },
        "1111010011011110"
    );

    #[test]
    fn test_display() {
        let inst = Inst::C {
            comp: Comp::new(Alu::DMinusA, true),
            dest: Dest::MD,
            jump: Jump::JLE,
        };
        assert_eq!(inst.to_string(), "MD=D-M;JLE");
        assert_eq!(Inst::A(24576).to_string(), "@24576");
        let inst = Inst::C {
            comp: Comp::new(Alu::Zero, false),
            dest: Dest::Null,
            jump: Jump::JMP,
        };
        assert_eq!(inst.to_string(), "0;JMP");
    }
}
