use std::fmt;

/// Signed 7-bit immediate of the RRI format, `[-64, 63]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Imm7(i8);

/// Unsigned 10-bit immediate of the RL format, `[0, 1023]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Imm10(u16);

impl Imm7 {
    pub const MIN: i64 = -64;
    pub const MAX: i64 = 63;
    const MASK: u16 = 0x7F;

    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Imm7(value as i8))
        } else {
            None
        }
    }

    pub fn value(self) -> i8 {
        self.0
    }

    /// Two's complement field bits.
    pub fn bits(self) -> u16 {
        (self.0 as u16) & Self::MASK
    }

    pub fn from_bits(bits: u16) -> Self {
        // shift the sign bit of the field into bit 7 and back to sign-extend
        Imm7(((bits & Self::MASK) as u8 as i8) << 1 >> 1)
    }
}

impl Imm10 {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 1023;
    const MASK: u16 = 0x3FF;

    pub fn new(value: i64) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Imm10(value as u16))
        } else {
            None
        }
    }

    pub fn value(self) -> u16 {
        self.0
    }

    pub fn bits(self) -> u16 {
        self.0 & Self::MASK
    }

    pub fn from_bits(bits: u16) -> Self {
        Imm10(bits & Self::MASK)
    }
}

impl fmt::Display for Imm7 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl fmt::Display for Imm10 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn imm7_range() {
        assert!(Imm7::new(-64).is_some());
        assert!(Imm7::new(63).is_some());
        assert!(Imm7::new(64).is_none());
        assert!(Imm7::new(-65).is_none());
    }

    #[test]
    fn imm7_twos_complement() {
        assert_eq!(Imm7::new(-1).unwrap().bits(), 0b111_1111);
        assert_eq!(Imm7::new(-64).unwrap().bits(), 0b100_0000);
        assert_eq!(Imm7::new(63).unwrap().bits(), 0b011_1111);
        assert_eq!(Imm7::new(5).unwrap().bits(), 0b000_0101);
    }

    #[test]
    fn imm7_sign_extends() {
        for v in Imm7::MIN..=Imm7::MAX {
            let imm = Imm7::new(v).unwrap();
            assert_eq!(Imm7::from_bits(imm.bits()), imm, "value {v}");
        }
    }

    #[test]
    fn imm10_range() {
        assert!(Imm10::new(0).is_some());
        assert!(Imm10::new(1023).is_some());
        assert!(Imm10::new(1024).is_none());
        assert!(Imm10::new(-1).is_none());
        assert_eq!(Imm10::from_bits(0xFFFF).value(), 1023);
    }
}
