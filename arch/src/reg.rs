use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    TryFromPrimitive,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Reg {
    #[default]
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
}

impl Reg {
    /// Parse a register operand: `r3`, `R3` or a bare `3`.
    pub fn parse(s: &str) -> Result<Self, String> {
        let digits = s.strip_prefix(['r', 'R']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Register id not an integer : {s}"));
        }
        digits
            .parse::<u8>()
            .ok()
            .and_then(|id| Reg::try_from(id).ok())
            .ok_or_else(|| format!("Register id must be < 8 : {s}"))
    }

    /// `r0`..`r7` can never be used as label names.
    pub fn is_reserved(name: &str) -> bool {
        name.parse::<Self>().is_ok()
    }

    pub fn index(self) -> u8 {
        self.into()
    }
}
