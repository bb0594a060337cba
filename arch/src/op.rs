use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::fmt;
use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive, EnumIter)]
#[repr(u8)]
pub enum OpKind {
    ADD = 0b000,
    ADDI = 0b001,
    NAND = 0b010,
    LUI = 0b011,
    SW = 0b100,
    LW = 0b101,
    BEQ = 0b110,
    JALR = 0b111,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Format {
    /// op(3) regA(3) regB(3) 0000 regC(3)
    RRR,
    /// op(3) regA(3) regB(3) imm7
    RRI,
    /// op(3) regA(3) imm10
    RL,
}

// Instruction Format Table. The assembler looks opcodes up by mnemonic,
// the decoder looks mnemonics up by opcode.
static MNEMONICS: Lazy<BiMap<&'static str, OpKind>> = Lazy::new(|| {
    BiMap::from_iter([
        ("add", OpKind::ADD),
        ("addi", OpKind::ADDI),
        ("nand", OpKind::NAND),
        ("lui", OpKind::LUI),
        ("sw", OpKind::SW),
        ("lw", OpKind::LW),
        ("beq", OpKind::BEQ),
        ("jalr", OpKind::JALR),
    ])
});

impl OpKind {
    pub fn parse(s: &str) -> Result<Self, String> {
        match MNEMONICS.get_by_left(s.to_ascii_lowercase().as_str()) {
            Some(op) => Ok(*op),
            None => Err(format!("Unknown opcode \"{s}\"")),
        }
    }

    pub fn mnemonic(&self) -> &'static str {
        MNEMONICS.get_by_right(self).copied().unwrap_or("???")
    }

    pub fn opcode(self) -> u8 {
        self.into()
    }

    pub fn format(&self) -> Format {
        use OpKind::*;
        match self {
            ADD | NAND => Format::RRR,
            ADDI | SW | LW | BEQ | JALR => Format::RRI,
            LUI => Format::RL,
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn table_covers_every_opcode() {
        for op in OpKind::iter() {
            assert_eq!(OpKind::parse(op.mnemonic()), Ok(op));
        }
        assert_eq!(MNEMONICS.len(), 8);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(OpKind::parse("BEQ"), Ok(OpKind::BEQ));
        assert_eq!(OpKind::parse("Lui"), Ok(OpKind::LUI));
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(OpKind::parse("mul"), Err("Unknown opcode \"mul\"".to_string()));
        assert!(OpKind::parse("nop").is_err());
    }

    #[test]
    fn formats() {
        assert_eq!(OpKind::ADD.format(), Format::RRR);
        assert_eq!(OpKind::NAND.format(), Format::RRR);
        assert_eq!(OpKind::LUI.format(), Format::RL);
        assert_eq!(OpKind::JALR.format(), Format::RRI);
        assert_eq!(OpKind::BEQ.opcode(), 0b110);
    }
}
