pub mod assembler;
pub mod disasm;
pub mod encoder;
pub mod error;
pub mod label;
pub mod msg;
pub mod parser;
pub mod psudo;
pub mod util;

pub use assembler::{assemble, Assembler, Emitted, Program};
pub use disasm::{decode_word, disassemble};
pub use error::{Error, ErrorKind, Result};
pub use label::{Labels, Symbol};
pub use msg::{Diag, Msg};
