use color_print::{cformat, cprintln};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Error(String),
    Warn(String),
    Note(String),
}

/// Non-fatal message tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diag {
    pub line: usize,
    pub raw: String,
    pub msg: Msg,
}

impl Msg {
    fn head(&self) -> String {
        match self {
            Msg::Error(msg) => cformat!("<red,bold>error</>: {}", msg),
            Msg::Warn(msg) => cformat!("<yellow,bold>warn</>: {}", msg),
            Msg::Note(msg) => cformat!("<green,bold>note</>: {}", msg),
        }
    }

    pub fn print(&self, info: (&str, usize, &str)) {
        let (file, line, raw) = info;
        if let Msg::Note(_) = self {
            // notes belong to the message printed just before
            cprintln!("      <blue>=</> {}", self.head());
            return;
        }
        println!("{}", self.head());
        cprintln!("     <blue>--></> <underline>{}:{}</>", file, line);
        cprintln!("      <blue>|</>");
        cprintln!(" <blue>{:>4} |</> {}", line, raw.trim_end());
        cprintln!("      <blue>|</>");
    }
}

impl Diag {
    pub fn warn(line: usize, raw: &str, msg: impl Into<String>) -> Self {
        Diag {
            line,
            raw: raw.to_string(),
            msg: Msg::Warn(msg.into()),
        }
    }

    pub fn print(&self, file: &str) {
        self.msg.print((file, self.line, &self.raw));
    }
}
