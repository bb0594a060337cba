use arch::Inst;

use crate::encoder;
use crate::error::{Error, Result};
use crate::label::{Labels, Symbol};
use crate::msg::Diag;
use crate::parser::{self, Line};
use crate::psudo::{self, Mnemonic};

/// One emitted word and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub addr: usize,
    /// 1-based source line.
    pub line: usize,
    pub inst: Inst,
}

#[derive(Debug)]
pub struct Program {
    pub lines: Vec<Line>,
    pub labels: Labels,
    pub code: Vec<Emitted>,
}

impl Program {
    pub fn words(&self) -> Vec<u16> {
        self.code.iter().map(|e| e.inst.to_bin()).collect()
    }

    /// The `.data` file contents.
    pub fn to_text(&self) -> String {
        encoder::serialize(&self.words())
    }
}

// ----------------------------------------------------------------------------

/// Runs are independent; warnings of the last run stay readable after it
/// returns, whether it failed or not.
#[derive(Debug, Default)]
pub struct Assembler {
    warnings: Vec<Diag>,
}

impl Assembler {
    pub fn new() -> Self {
        Assembler::default()
    }

    pub fn warnings(&self) -> &[Diag] {
        &self.warnings
    }

    /// Each pass covers the whole source before the next starts, so an error
    /// from an earlier pass wins over one on an earlier line in a later pass.
    pub fn assemble(&mut self, src: &str) -> Result<Program> {
        self.warnings.clear();

        log::debug!("pass 1: preprocess");
        let mut lines = parser::parse_source(src)?;

        log::debug!("pass 2: collect labels");
        let labels = Labels::collect(&lines)?;

        log::debug!("pass 3: substitute, expand and encode");
        let mut code = vec![];
        let mut pc: usize = 0;
        for line in lines.iter_mut().filter(|line| line.is_valid()) {
            let no = line.no();
            let insts = self.emit(line, &labels, pc).map_err(|e| e.at(no))?;
            for inst in insts {
                log::trace!("{:04X}: {:016b}  {}", pc, inst.to_bin(), inst);
                code.push(Emitted { addr: pc, line: no, inst });
                pc += 1;
            }
        }

        Ok(Program {
            lines,
            labels,
            code,
        })
    }

    fn emit(&mut self, line: &mut Line, labels: &Labels, pc: usize) -> Result<Vec<Inst>> {
        let mnemonic = Mnemonic::parse(line.mnemonic().unwrap_or_default())?;
        self.substitute(line, labels, mnemonic, pc);

        let insts = psudo::expand(mnemonic, line.operands())?;
        if insts.len() != mnemonic.width() {
            return Err(Error::internal(format!(
                "`{}` emitted {} words but {} were reserved",
                line.tokens[0],
                insts.len(),
                mnemonic.width()
            )));
        }
        Ok(insts)
    }

    /// Replace label operands with their bound values in place.
    fn substitute(&mut self, line: &mut Line, labels: &Labels, mnemonic: Mnemonic, pc: usize) {
        let (no, raw) = (line.no(), line.raw().to_string());
        for tok in line.tokens.iter_mut().skip(1) {
            let value = match labels.get(tok) {
                Some(Symbol::Addr(addr)) if mnemonic.is_branch() => {
                    // offset is relative to the next instruction
                    (*addr as i64 - pc as i64 - 1).to_string()
                }
                Some(Symbol::Addr(addr)) => {
                    self.warnings.push(Diag::warn(
                        no,
                        &raw,
                        format!(
                            "using label address as immediate value in non-branch instruction (`{}` = {})",
                            tok, addr
                        ),
                    ));
                    addr.to_string()
                }
                Some(Symbol::Literal(text)) => text.clone(),
                None => continue,
            };
            *tok = value;
        }
    }
}

/// Assemble a source text in one go, discarding warnings.
pub fn assemble(src: &str) -> Result<Program> {
    Assembler::new().assemble(src)
}

// ----------------------------------------------------------------------------
