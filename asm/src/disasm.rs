use arch::Inst;

use crate::error::{Error, Result};

/// Decode one 16-character `0`/`1` word.
pub fn decode_word(word: &str) -> Result<Inst> {
    if word.len() != 16 || !word.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(Error::input(format!(
            "Expected 16 binary digits, found `{word}`"
        )));
    }
    let bin = u16::from_str_radix(word, 2).map_err(|e| Error::input(e.to_string()))?;
    Ok(Inst::from_bin(bin))
}

/// Decode a whole word file. Blank lines are skipped.
pub fn disassemble(text: &str) -> Result<Vec<Inst>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| decode_word(line.trim()).map_err(|e| e.at(idx + 1)))
        .collect()
}
