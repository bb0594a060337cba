use arch::{Format, Imm10, Imm7, Inst, OpKind, Reg};

use crate::error::{Error, Result};

/// Parse a numeric literal: optional `-`, then an optional `0x`/`0b`/`0o`
/// prefix, then digits.
pub fn parse_imm(s: &str) -> Result<i64> {
    let (neg, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s),
    };
    let (radix, digits) = match body.get(..2) {
        Some("0x") | Some("0X") => (16, &body[2..]),
        Some("0b") | Some("0B") => (2, &body[2..]),
        Some("0o") | Some("0O") => (8, &body[2..]),
        _ => (10, body),
    };
    // from_str_radix would accept a second sign
    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return Err(not_a_literal(s));
    }
    let abs = i64::from_str_radix(digits, radix).map_err(|_| not_a_literal(s))?;
    Ok(if neg { -abs } else { abs })
}

fn not_a_literal(s: &str) -> Error {
    Error::immediate(format!("Cannot parse `{s}` as an immediate (undefined label?)"))
}

// ----------------------------------------------------------------------------
// Fields

/// Reject operands beyond `count`. Missing operands are reported by the
/// field that needs them.
pub fn arity(args: &[String], count: usize) -> Result<()> {
    match args.get(count) {
        Some(extra) => Err(Error::preprocessor(format!("Unexpected operand `{extra}`"))),
        None => Ok(()),
    }
}

pub fn reg(args: &[String], index: usize) -> Result<Reg> {
    let tok = args
        .get(index)
        .ok_or_else(|| Error::register("Missing register operand"))?;
    Reg::parse(tok).map_err(Error::register)
}

pub fn simm7(args: &[String], index: usize) -> Result<Imm7> {
    let tok = args
        .get(index)
        .ok_or_else(|| Error::immediate("Missing immediate operand"))?;
    let value = parse_imm(tok)?;
    Imm7::new(value).ok_or_else(|| {
        Error::immediate(format!(
            "Value {value} is outside signed immediate field limit ({} to {})",
            Imm7::MIN,
            Imm7::MAX
        ))
    })
}

pub fn uimm10(args: &[String], index: usize) -> Result<Imm10> {
    let tok = args
        .get(index)
        .ok_or_else(|| Error::immediate("Missing immediate operand"))?;
    let value = parse_imm(tok)?;
    Imm10::new(value).ok_or_else(|| {
        Error::immediate(format!(
            "Value {value} is outside large immediate field limit ({} to 0x{:X})",
            Imm10::MIN,
            Imm10::MAX
        ))
    })
}

// ----------------------------------------------------------------------------

/// Build a canonical instruction from its operand tokens, checking every
/// field against its bit budget.
pub fn encode(op: OpKind, args: &[String]) -> Result<Inst> {
    macro_rules! arg {
        ($index:expr, $field:ident) => {
            $field(args, $index)?
        };
    }

    // a third `jalr` operand is accepted and dropped, the field is always zero
    match op.format() {
        Format::RRR | Format::RRI => arity(args, 3)?,
        Format::RL => arity(args, 2)?,
    }

    let inst = match op {
        OpKind::ADD => Inst::ADD(arg!(0, reg), arg!(1, reg), arg!(2, reg)),
        OpKind::NAND => Inst::NAND(arg!(0, reg), arg!(1, reg), arg!(2, reg)),
        OpKind::ADDI => Inst::ADDI(arg!(0, reg), arg!(1, reg), arg!(2, simm7)),
        OpKind::SW => Inst::SW(arg!(0, reg), arg!(1, reg), arg!(2, simm7)),
        OpKind::LW => Inst::LW(arg!(0, reg), arg!(1, reg), arg!(2, simm7)),
        OpKind::BEQ => Inst::BEQ(arg!(0, reg), arg!(1, reg), arg!(2, simm7)),
        OpKind::JALR => Inst::JALR(arg!(0, reg), arg!(1, reg)),
        OpKind::LUI => Inst::LUI(arg!(0, reg), arg!(1, uimm10)),
    };
    Ok(inst)
}

/// Render words one per line, 16 `0`/`1` characters each.
pub fn serialize(words: &[u16]) -> String {
    words.iter().map(|word| format!("{:016b}\n", word)).collect()
}

// ----------------------------------------------------------------------------
