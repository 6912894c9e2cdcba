use num_enum::{FromPrimitive, IntoPrimitive};
use strum::Display;

/// Registers written by a compute instruction, bits `d1 d2 d3` = `A D M`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, IntoPrimitive, Display,
)]
#[repr(u8)]
pub enum Dest {
    #[default]
    #[strum(serialize = "")]
    Null = 0b000,
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    /// The key is the set of registers, so `DM` and `MD` are the same destination.
    /// A repeated or foreign letter is rejected.
    pub fn parse(s: &str) -> Option<Dest> {
        if s.is_empty() {
            return None;
        }
        let mut mask: u8 = 0;
        for c in s.chars() {
            let bit = match c {
                'A' => 0b100,
                'D' => 0b010,
                'M' => 0b001,
                _ => return None,
            };
            if mask & bit != 0 {
                return None;
            }
            mask |= bit;
        }
        Some(Dest::from(mask))
    }

    pub fn bits(self) -> u16 {
        u8::from(self) as u16
    }
}

#[test]
fn test_dest_order() {
    assert_eq!(Dest::parse("MD"), Some(Dest::MD));
    assert_eq!(Dest::parse("DM"), Some(Dest::MD));
    assert_eq!(Dest::parse("MDA"), Some(Dest::AMD));
    assert_eq!(Dest::parse("DA"), Some(Dest::AD));
    assert_eq!(Dest::parse("A").map(Dest::bits), Some(0b100));
}

#[test]
fn test_dest_invalid() {
    assert_eq!(Dest::parse(""), None);
    assert_eq!(Dest::parse("DD"), None);
    assert_eq!(Dest::parse("X"), None);
    assert_eq!(Dest::parse("0"), None);
    assert_eq!(Dest::parse("md"), None);
}

#[test]
fn test_dest_display() {
    assert_eq!(Dest::AMD.to_string(), "AMD");
    assert_eq!(Dest::Null.to_string(), "");
}
