use crate::{
    imm::{Imm10, Imm7},
    op::OpKind,
    reg::Reg,
};

use color_print::cformat;
use std::fmt;

/// Canonical instruction, one 16-bit word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    ADD(Reg, Reg, Reg),
    ADDI(Reg, Reg, Imm7),
    NAND(Reg, Reg, Reg),
    LUI(Reg, Imm10),
    SW(Reg, Reg, Imm7),
    LW(Reg, Reg, Imm7),
    BEQ(Reg, Reg, Imm7),
    JALR(Reg, Reg),
}

// ----------------------------------------------------------------------------

fn enc_format(op: OpKind, ra: Reg, rb: Reg, low: u16) -> u16 {
    ((op.opcode() as u16) << 13) | ((ra.index() as u16) << 10) | ((rb.index() as u16) << 7) | low
}

fn dec_format(bin: u16) -> (u8, u8, u8, u16) {
    let opcode = ((bin >> 13) & 0x7) as u8;
    let ra = ((bin >> 10) & 0x7) as u8;
    let rb = ((bin >> 7) & 0x7) as u8;
    let low = bin & 0x7F;
    (opcode, ra, rb, low)
}

fn reg(id: u8) -> Reg {
    Reg::try_from(id & 0x7).unwrap_or_default()
}

// ----------------------------------------------------------------------------

impl Inst {
    pub fn kind(&self) -> OpKind {
        match self {
            Inst::ADD(..) => OpKind::ADD,
            Inst::ADDI(..) => OpKind::ADDI,
            Inst::NAND(..) => OpKind::NAND,
            Inst::LUI(..) => OpKind::LUI,
            Inst::SW(..) => OpKind::SW,
            Inst::LW(..) => OpKind::LW,
            Inst::BEQ(..) => OpKind::BEQ,
            Inst::JALR(..) => OpKind::JALR,
        }
    }

    pub fn to_bin(&self) -> u16 {
        let op = self.kind();
        match *self {
            Inst::ADD(ra, rb, rc) | Inst::NAND(ra, rb, rc) => {
                enc_format(op, ra, rb, rc.index() as u16)
            }
            Inst::ADDI(ra, rb, imm)
            | Inst::SW(ra, rb, imm)
            | Inst::LW(ra, rb, imm)
            | Inst::BEQ(ra, rb, imm) => enc_format(op, ra, rb, imm.bits()),
            Inst::JALR(ra, rb) => enc_format(op, ra, rb, 0),
            Inst::LUI(ra, imm) => ((op.opcode() as u16) << 13) | ((ra.index() as u16) << 10) | imm.bits(),
        }
    }

    /// Decode a word. Bits the format does not use are ignored.
    pub fn from_bin(bin: u16) -> Inst {
        let (opcode, ra, rb, low) = dec_format(bin);
        let (ra, rb) = (reg(ra), reg(rb));
        match OpKind::try_from(opcode).unwrap_or(OpKind::ADD) {
            OpKind::ADD => Inst::ADD(ra, rb, reg(low as u8)),
            OpKind::NAND => Inst::NAND(ra, rb, reg(low as u8)),
            OpKind::ADDI => Inst::ADDI(ra, rb, Imm7::from_bits(low)),
            OpKind::SW => Inst::SW(ra, rb, Imm7::from_bits(low)),
            OpKind::LW => Inst::LW(ra, rb, Imm7::from_bits(low)),
            OpKind::BEQ => Inst::BEQ(ra, rb, Imm7::from_bits(low)),
            OpKind::JALR => Inst::JALR(ra, rb),
            OpKind::LUI => Inst::LUI(ra, Imm10::from_bits(bin)),
        }
    }
}

// ----------------------------------------------------------------------------

impl fmt::Display for Inst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind().mnemonic();
        match self {
            Inst::ADD(ra, rb, rc) | Inst::NAND(ra, rb, rc) => write!(f, "{name} {ra}, {rb}, {rc}"),
            Inst::ADDI(ra, rb, imm)
            | Inst::SW(ra, rb, imm)
            | Inst::LW(ra, rb, imm)
            | Inst::BEQ(ra, rb, imm) => write!(f, "{name} {ra}, {rb}, {imm}"),
            Inst::JALR(ra, rb) => write!(f, "{name} {ra}, {rb}"),
            Inst::LUI(ra, imm) => write!(f, "{name} {ra}, {imm}"),
        }
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        macro_rules! rrr {
            ($name:expr, $ra:expr, $rb:expr, $rc:expr) => {
                cformat!("<r>{:<5}</><b>{:<3} {:<3} {:<3}</>", $name, $ra, $rb, $rc)
            };
        }

        macro_rules! rri {
            ($name:expr, $ra:expr, $rb:expr, $imm:expr) => {
                cformat!("<r>{:<5}</><b>{:<3} {:<3} <y>{:<5}</></>", $name, $ra, $rb, $imm)
            };
        }

        let name = self.kind().mnemonic();
        match self {
            Inst::ADD(ra, rb, rc) | Inst::NAND(ra, rb, rc) => rrr!(name, ra, rb, rc),
            Inst::ADDI(ra, rb, imm)
            | Inst::SW(ra, rb, imm)
            | Inst::LW(ra, rb, imm)
            | Inst::BEQ(ra, rb, imm) => rri!(name, ra, rb, imm),
            Inst::JALR(ra, rb) => rrr!(name, ra, rb, ""),
            Inst::LUI(ra, imm) => rri!(name, ra, "", imm),
        }
    }
}

// ----------------------------------------------------------------------------
