use bimap::BiMap;
use num_enum::IntoPrimitive;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt::Display;

/// ALU control bits `zx nx zy ny f no`.
/// The second operand is written as `A`; the a-bit of [`Comp`] turns it into `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive)]
#[repr(u8)]
pub enum Alu {
    Zero = 0b101010,
    One = 0b111111,
    NegOne = 0b111010,
    D = 0b001100,
    A = 0b110000,
    NotD = 0b001101,
    NotA = 0b110001,
    NegD = 0b001111,
    NegA = 0b110011,
    DPlusOne = 0b011111,
    APlusOne = 0b110111,
    DMinusOne = 0b001110,
    AMinusOne = 0b110010,
    DPlusA = 0b000010,
    DMinusA = 0b010011,
    AMinusD = 0b000111,
    DAndA = 0b000000,
    DOrA = 0b010101,
}

static ALU_STR: Lazy<BiMap<Alu, &'static str>> = Lazy::new(|| {
    let mut map: BiMap<Alu, &'static str> = BiMap::new();
    map.insert(Alu::Zero, "0");
    map.insert(Alu::One, "1");
    map.insert(Alu::NegOne, "-1");
    map.insert(Alu::D, "D");
    map.insert(Alu::A, "A");
    map.insert(Alu::NotD, "!D");
    map.insert(Alu::NotA, "!A");
    map.insert(Alu::NegD, "-D");
    map.insert(Alu::NegA, "-A");
    map.insert(Alu::DPlusOne, "D+1");
    map.insert(Alu::APlusOne, "A+1");
    map.insert(Alu::DMinusOne, "D-1");
    map.insert(Alu::AMinusOne, "A-1");
    map.insert(Alu::DPlusA, "D+A");
    map.insert(Alu::DMinusA, "D-A");
    map.insert(Alu::AMinusD, "A-D");
    map.insert(Alu::DAndA, "D&A");
    map.insert(Alu::DOrA, "D|A");
    map
});

// Commuted spellings of the commutative operations
static ALU_ALIAS: Lazy<HashMap<&'static str, Alu>> = Lazy::new(|| {
    let mut map: HashMap<&'static str, Alu> = HashMap::new();
    map.insert("A+D", Alu::DPlusA);
    map.insert("A&D", Alu::DAndA);
    map.insert("A|D", Alu::DOrA);
    map
});

impl Alu {
    /// Looks up an A-spelled computation such as `D+A` or `A&D`.
    pub fn parse(s: &str) -> Option<Alu> {
        ALU_STR
            .get_by_right(s)
            .or_else(|| ALU_ALIAS.get(s))
            .copied()
    }

    pub fn format(&self) -> &'static str {
        ALU_STR.get_by_left(self).copied().unwrap_or("?")
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

/// A full computation: ALU bits plus the a-bit selecting `A` or `M`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Comp {
    pub alu: Alu,
    pub mem: bool,
}

impl Comp {
    pub fn new(alu: Alu, mem: bool) -> Self {
        Comp { alu, mem }
    }

    /// `M`-spelled computations are normalized to their `A` spelling and
    /// flagged with the a-bit. Mixing `A` and `M` in one computation is rejected.
    pub fn parse(s: &str) -> Option<Comp> {
        if s.contains('M') {
            if s.contains('A') {
                return None;
            }
            let alu = Alu::parse(&s.replace('M', "A"))?;
            Some(Comp::new(alu, true))
        } else {
            Some(Comp::new(Alu::parse(s)?, false))
        }
    }

    /// Seven bits `a c1 c2 c3 c4 c5 c6`.
    pub fn bits(&self) -> u16 {
        ((self.mem as u16) << 6) | self.alu.bits()
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mem {
            write!(f, "{}", self.alu.format().replace('A', "M"))
        } else {
            write!(f, "{}", self.alu.format())
        }
    }
}
