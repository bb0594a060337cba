use color_print::cformat;
use indexmap::IndexMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::parser::{Line, LineKind};
use crate::psudo::Mnemonic;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Symbol {
    /// Address of an emitted instruction.
    Addr(usize),
    /// Token inherited through `.fill`/`.space`, substituted verbatim.
    Literal(String),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Addr(addr) => write!(f, "0x{:04X}", addr),
            Symbol::Literal(text) => write!(f, "{}", text),
        }
    }
}

// name -> (line of definition, value)
#[derive(Debug, Default)]
pub struct Labels {
    labels: IndexMap<String, (usize, Symbol)>,
}

impl Labels {
    pub fn new() -> Self {
        Labels {
            labels: IndexMap::new(),
        }
    }

    pub fn insert(&mut self, name: &str, line: usize, symbol: Symbol) -> Result<()> {
        if let Some((prev, _)) = self.labels.get(name) {
            return Err(Error::preprocessor(format!(
                "Re-defined label `{name}` (already defined at line {prev})"
            ))
            .at(line));
        }
        log::trace!("label {} = {} (line {})", name, symbol, line);
        self.labels.insert(name.to_string(), (line, symbol));
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.labels.get(name).map(|(_, symbol)| symbol)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize, &Symbol)> {
        self.labels
            .iter()
            .map(|(name, (line, symbol))| (name.as_str(), *line, symbol))
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn cformat(&self, name: &str) -> String {
        match self.get(name) {
            Some(Symbol::Addr(addr)) => cformat!("<g>{}</> = <y>0x{:04X}</>", name, addr),
            Some(Symbol::Literal(text)) => cformat!("<c>{}</> = <y>{}</>", name, text),
            None => cformat!("<r,u>{}</>", name),
        }
    }
}

// ----------------------------------------------------------------------------

impl Labels {
    /// Walk the lines in order and bind every label. The address counter
    /// advances by the number of words each instruction line expands to, so
    /// addresses match the emitted stream.
    pub fn collect(lines: &[Line]) -> Result<Labels> {
        let mut labels = Labels::new();
        let mut pc: usize = 0;

        for line in lines {
            if let Some(name) = line.label() {
                let symbol = match line.kind() {
                    LineKind::Directive => directive_value(line, &labels)?,
                    LineKind::Empty | LineKind::Instruction => Symbol::Addr(pc),
                };
                labels.insert(name, line.no(), symbol)?;
            } else if line.kind() == LineKind::Directive {
                directive_value(line, &labels)?;
            }

            if line.is_valid() {
                // unknown mnemonics are reported by the encoding pass
                let width = line
                    .mnemonic()
                    .and_then(|m| Mnemonic::parse(m).ok())
                    .map_or(1, |m| m.width());
                pc += width;
            }
        }

        log::debug!("collected {} labels, {} words", labels.len(), pc);
        Ok(labels)
    }
}

fn directive_value(line: &Line, labels: &Labels) -> Result<Symbol> {
    let directive = line.mnemonic().unwrap_or_default();
    match directive.to_ascii_lowercase().as_str() {
        ".fill" => {
            let operand = line.operands().first().ok_or_else(|| {
                Error::preprocessor(".fill requires a value or label").at(line.no())
            })?;
            match labels.get(operand) {
                Some(symbol) => Ok(symbol.clone()),
                None => Ok(Symbol::Literal(operand.clone())),
            }
        }
        ".space" => Ok(Symbol::Literal("0".to_string())),
        _ => Err(Error::opcode(format!("Unknown directive \"{directive}\"")).at(line.no())),
    }
}

// ----------------------------------------------------------------------------
