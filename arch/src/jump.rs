use num_enum::IntoPrimitive;
use strum::{Display, EnumString};

/// Jump condition bits `j1 j2 j3` = `lt eq gt`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, IntoPrimitive, EnumString, Display,
)]
#[repr(u8)]
pub enum Jump {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Jump> {
        match s.parse::<Self>() {
            Ok(Jump::Null) | Err(_) => None,
            Ok(jump) => Some(jump),
        }
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test_jump() {
    assert_eq!(Jump::parse("JGT").map(Jump::bits), Some(0b001));
    assert_eq!(Jump::parse("JLE").map(Jump::bits), Some(0b110));
    assert_eq!(Jump::parse("JMP").map(Jump::bits), Some(0b111));
    assert_eq!(Jump::parse("Null"), None);
    assert_eq!(Jump::parse("jmp"), None);
    assert_eq!(Jump::parse(""), None);
}
