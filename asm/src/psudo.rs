use arch::{Imm10, Imm7, Inst, OpKind, Reg};
use strum::{Display, EnumString};

use crate::encoder;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Psudo {
    /// add r0, r0, r0
    NOP,
    /// jalr r0, r0
    HALT,
    /// addi rX, rX, imm & 0x3F
    LLI,
    /// lui rX, imm >> 6 ; addi rX, rX, imm & 0x3F
    MOVI,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Op(OpKind),
    Psudo(Psudo),
}

impl Mnemonic {
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(op) = OpKind::parse(s) {
            return Ok(Mnemonic::Op(op));
        }
        match s.parse::<Psudo>() {
            Ok(psudo) => Ok(Mnemonic::Psudo(psudo)),
            Err(_) => Err(Error::opcode(format!("Unknown opcode \"{s}\""))),
        }
    }

    /// Number of instruction words this mnemonic emits.
    pub fn width(&self) -> usize {
        match self {
            Mnemonic::Psudo(Psudo::MOVI) => 2,
            _ => 1,
        }
    }

    pub fn is_branch(&self) -> bool {
        *self == Mnemonic::Op(OpKind::BEQ)
    }
}

// ----------------------------------------------------------------------------

/// Range accepted by `lli` and `movi`: anything with a 16-bit pattern.
const WIDE_MIN: i64 = i16::MIN as i64;
const WIDE_MAX: i64 = u16::MAX as i64;

fn wide_imm(args: &[String], index: usize) -> Result<u16> {
    let tok = args
        .get(index)
        .ok_or_else(|| Error::immediate("Missing immediate operand"))?;
    let value = encoder::parse_imm(tok)?;
    if !(WIDE_MIN..=WIDE_MAX).contains(&value) {
        return Err(Error::immediate(format!(
            "Value {value} does not fit in 16 bits ({WIDE_MIN} to {WIDE_MAX})"
        )));
    }
    Ok(value as u16)
}

fn low6(reg: Reg, bits: u16) -> Result<Inst> {
    let imm = Imm7::new((bits & 0x3F) as i64)
        .ok_or_else(|| Error::internal("low 6 bits do not fit the signed field"))?;
    Ok(Inst::ADDI(reg, reg, imm))
}

/// Rewrite one (already substituted) line into canonical instructions.
pub fn expand(mnemonic: Mnemonic, args: &[String]) -> Result<Vec<Inst>> {
    let psudo = match mnemonic {
        Mnemonic::Op(op) => return Ok(vec![encoder::encode(op, args)?]),
        Mnemonic::Psudo(psudo) => psudo,
    };

    match psudo {
        Psudo::NOP => {
            encoder::arity(args, 0)?;
            Ok(vec![Inst::ADD(Reg::R0, Reg::R0, Reg::R0)])
        }
        // operands are ignored, the target is always r0
        Psudo::HALT => Ok(vec![Inst::JALR(Reg::R0, Reg::R0)]),
        Psudo::LLI => {
            encoder::arity(args, 2)?;
            let reg = encoder::reg(args, 0)?;
            let bits = wide_imm(args, 1)?;
            Ok(vec![low6(reg, bits)?])
        }
        Psudo::MOVI => {
            encoder::arity(args, 2)?;
            let reg = encoder::reg(args, 0)?;
            let bits = wide_imm(args, 1)?;
            let upper = Imm10::new(((bits >> 6) & 0x3FF) as i64)
                .ok_or_else(|| Error::internal("upper 10 bits do not fit the long field"))?;
            Ok(vec![Inst::LUI(reg, upper), low6(reg, bits)?])
        }
    }
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run(mnemonic: &str, list: &[&str]) -> Result<Vec<Inst>> {
        expand(Mnemonic::parse(mnemonic)?, &args(list))
    }

    #[test]
    fn mnemonic_parse() {
        assert_eq!(Mnemonic::parse("beq"), Ok(Mnemonic::Op(OpKind::BEQ)));
        assert_eq!(Mnemonic::parse("MOVI"), Ok(Mnemonic::Psudo(Psudo::MOVI)));
        let e = Mnemonic::parse("jmp").unwrap_err();
        assert_eq!(e.kind, ErrorKind::OpcodeDecode);
    }

    #[test]
    fn widths() {
        assert_eq!(Mnemonic::Psudo(Psudo::MOVI).width(), 2);
        assert_eq!(Mnemonic::Psudo(Psudo::LLI).width(), 1);
        assert_eq!(Mnemonic::Op(OpKind::LUI).width(), 1);
    }

    #[test]
    fn nop_is_add_r0() {
        let nop = run("nop", &[]).unwrap();
        let add = run("add", &["r0", "r0", "r0"]).unwrap();
        assert_eq!(nop, add);
        assert_eq!(nop[0].to_bin(), 0);
    }

    #[test]
    fn halt_is_jalr_r0() {
        let halt = run("halt", &[]).unwrap();
        let jalr = run("jalr", &["r0", "r0"]).unwrap();
        assert_eq!(halt, jalr);
    }

    #[test]
    fn halt_ignores_operands() {
        let halt = run("halt", &[]).unwrap();
        assert_eq!(run("halt", &["r7"]).unwrap(), halt);
        assert_eq!(run("halt", &["r3", "r5"]).unwrap(), halt);
        assert_eq!(halt[0].to_bin(), 0b111 << 13);
    }

    #[test]
    fn lli_keeps_low_six_bits() {
        let out = run("lli", &["r2", "0x1234"]).unwrap();
        assert_eq!(out, vec![Inst::ADDI(Reg::R2, Reg::R2, Imm7::new(0x34).unwrap())]);
        let out = run("lli", &["r2", "-1"]).unwrap();
        assert_eq!(out, vec![Inst::ADDI(Reg::R2, Reg::R2, Imm7::new(63).unwrap())]);
    }

    #[test]
    fn movi_splits_into_lui_and_addi() {
        let out = run("movi", &["r3", "1000"]).unwrap();
        assert_eq!(
            out,
            vec![
                Inst::LUI(Reg::R3, Imm10::new(1000 >> 6).unwrap()),
                Inst::ADDI(Reg::R3, Reg::R3, Imm7::new(1000 & 0x3F).unwrap()),
            ]
        );
        match (out[0], out[1]) {
            (Inst::LUI(_, upper), Inst::ADDI(_, _, lower)) => {
                assert_eq!((upper.value() << 6) | lower.value() as u16, 1000);
            }
            other => panic!("unexpected expansion {other:?}"),
        }
    }

    #[test]
    fn movi_full_range() {
        for value in [0i64, 63, 64, 0xFFFF, -1, -32768] {
            let text = value.to_string();
            let out = run("movi", &["r1", text.as_str()]).unwrap();
            let (Inst::LUI(_, upper), Inst::ADDI(_, _, lower)) = (out[0], out[1]) else {
                panic!("unexpected expansion {out:?}");
            };
            assert_eq!((upper.value() << 6) | lower.value() as u16, value as u16);
        }
    }

    #[test]
    fn movi_rejects_wide_literal() {
        let e = run("movi", &["r1", "65536"]).unwrap_err();
        assert_eq!(e.kind, ErrorKind::ImmediateDecode);
        let e = run("lli", &["r1", "-32769"]).unwrap_err();
        assert_eq!(e.kind, ErrorKind::ImmediateDecode);
    }

    #[test]
    fn psudo_arity() {
        assert_eq!(run("nop", &["r1"]).unwrap_err().kind, ErrorKind::Preprocessor);
        assert_eq!(run("movi", &["r1"]).unwrap_err().kind, ErrorKind::ImmediateDecode);
        assert_eq!(run("lli", &[]).unwrap_err().kind, ErrorKind::RegisterDecode);
    }
}
