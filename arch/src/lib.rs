//! RiSC-16 instruction set: 8 registers, 8 opcodes, 16-bit words.

pub mod imm;
pub mod inst;
pub mod op;
pub mod reg;

pub use imm::{Imm10, Imm7};
pub use inst::Inst;
pub use op::{Format, OpKind};
pub use reg::Reg;
