use crate::msg::Msg;
use strum::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ErrorKind {
    #[strum(serialize = "Opcode decode error")]
    OpcodeDecode,

    #[strum(serialize = "Register decode error")]
    RegisterDecode,

    #[strum(serialize = "Immediate decode error")]
    ImmediateDecode,

    #[strum(serialize = "Pre processor error")]
    Preprocessor,

    #[strum(serialize = "Input error")]
    Input,

    #[strum(serialize = "Internal error")]
    Internal,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
    /// 1-based source line, attached by the pass that found the error.
    pub line: Option<usize>,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn new(kind: ErrorKind, msg: impl Into<String>) -> Self {
        Error {
            kind,
            msg: msg.into(),
            line: None,
        }
    }

    pub fn opcode(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::OpcodeDecode, msg)
    }

    pub fn register(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::RegisterDecode, msg)
    }

    pub fn immediate(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::ImmediateDecode, msg)
    }

    pub fn preprocessor(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Preprocessor, msg)
    }

    pub fn input(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Input, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, msg)
    }

    /// Attach a line number unless one is already set.
    pub fn at(mut self, line: usize) -> Self {
        self.line.get_or_insert(line);
        self
    }

    /// Print error with diagnostic information showing file location and line content
    pub fn print_diag(&self, file: &str, raw: &str) {
        let pos = (file, self.line.unwrap_or(0), raw);
        Msg::Error(self.to_string()).print(pos);
        let note = match self.kind {
            ErrorKind::RegisterDecode => Some("registers are r0 to r7"),
            ErrorKind::ImmediateDecode => {
                Some("signed immediates take -64 to 63, lui takes 0 to 1023")
            }
            ErrorKind::Internal => Some("this is a bug in the assembler"),
            ErrorKind::OpcodeDecode | ErrorKind::Preprocessor | ErrorKind::Input => None,
        };
        if let Some(note) = note {
            Msg::Note(note.to_string()).print(pos);
        }
    }
}
