use strum::{Display, EnumIter, EnumString};

/// Symbols with a fixed address in every Hack program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display)]
pub enum Predefined {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
    SCREEN,
    KBD,
}

pub const SCREEN_ADDR: u16 = 0x4000;
pub const KBD_ADDR: u16 = 0x6000;

impl Predefined {
    pub fn addr(&self) -> u16 {
        use Predefined::*;
        match self {
            R0 | SP => 0,
            R1 | LCL => 1,
            R2 | ARG => 2,
            R3 | THIS => 3,
            R4 | THAT => 4,
            R5 => 5,
            R6 => 6,
            R7 => 7,
            R8 => 8,
            R9 => 9,
            R10 => 10,
            R11 => 11,
            R12 => 12,
            R13 => 13,
            R14 => 14,
            R15 => 15,
            SCREEN => SCREEN_ADDR,
            KBD => KBD_ADDR,
        }
    }
}

#[test]
fn test_predefined() {
    use strum::IntoEnumIterator;
    assert_eq!(Predefined::iter().count(), 23);
    assert_eq!("SCREEN".parse::<Predefined>().map(|p| p.addr()), Ok(16384));
    assert_eq!("KBD".parse::<Predefined>().map(|p| p.addr()), Ok(24576));
    assert_eq!(Predefined::THAT.addr(), 4);
    assert_eq!(Predefined::R13.to_string(), "R13");
}
