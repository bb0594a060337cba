use arch::Reg;
use color_print::cformat;

use crate::error::{Error, Result};

// ----------------------------------------------------------------------------
// Line

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Nothing left after comment and label removal.
    Empty,
    /// First token starts with `.`.
    Directive,
    Instruction,
}

/// One source line after preprocessing.
#[derive(Debug, Clone)]
pub struct Line {
    no: usize,
    raw: String,
    label: Option<String>,
    comment: Option<String>,
    /// `tokens[0]` is the mnemonic or directive, the rest are operands.
    pub tokens: Vec<String>,
    kind: LineKind,
}

impl Line {
    /// `no` is 1-based.
    pub fn parse(no: usize, raw: &str) -> Result<Self> {
        let (code, comment) = match raw.split_once('#') {
            Some((code, comment)) => (code, Some(comment.trim_end().to_string())),
            None => (raw, None),
        };

        let (label, body) = match code.split_once(':') {
            Some((label, body)) => {
                if body.contains(':') {
                    return Err(Error::preprocessor("Multiple ':' detected!").at(no));
                }
                let label = label.trim();
                check_label(label).map_err(|e| e.at(no))?;
                (Some(label.to_string()), body)
            }
            None => (None, code),
        };

        let tokens: Vec<String> = body
            .replace(',', " ")
            .split_whitespace()
            .map(str::to_string)
            .collect();

        let kind = match tokens.first() {
            None => LineKind::Empty,
            Some(head) if head.starts_with('.') => LineKind::Directive,
            Some(_) => LineKind::Instruction,
        };

        Ok(Line {
            no,
            raw: raw.to_string(),
            label,
            comment,
            tokens,
            kind,
        })
    }

    pub fn no(&self) -> usize {
        self.no
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Whether this line emits instructions.
    pub fn is_valid(&self) -> bool {
        self.kind == LineKind::Instruction
    }

    pub fn mnemonic(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    pub fn operands(&self) -> &[String] {
        self.tokens.get(1..).unwrap_or(&[])
    }
}

impl Line {
    pub fn cformat(&self) -> String {
        let label = match &self.label {
            Some(label) => cformat!("<g>{}:</> ", label),
            None => String::new(),
        };
        let body = match self.kind {
            LineKind::Empty => String::new(),
            LineKind::Directive => cformat!("<c>{}</>", self.tokens.join(" ")),
            LineKind::Instruction => cformat!(
                "<r>{:<5}</><b>{}</>",
                self.tokens[0],
                self.operands().join(", ")
            ),
        };
        let comment = match &self.comment {
            Some(comment) => format!(" #{}", comment),
            None => String::new(),
        };
        format!("{}{}{}", label, body, comment)
    }
}

// ----------------------------------------------------------------------------
// Label

fn check_label(label: &str) -> Result<()> {
    if label.is_empty() {
        return Err(Error::preprocessor("Label must not be empty"));
    }
    if label.contains(|c: char| c.is_whitespace() || c == ',') {
        return Err(Error::preprocessor("Label must not contain delimiters"));
    }
    if label.starts_with(|c: char| c == '-' || c.is_ascii_digit()) {
        return Err(Error::preprocessor(format!(
            "Illegal label name `{label}` (starts with - or digit)"
        )));
    }
    if Reg::is_reserved(label) {
        return Err(Error::preprocessor(format!(
            "Label name `{label}` is a reserved keyword"
        )));
    }
    Ok(())
}

/// Preprocess every line of a source text.
pub fn parse_source(src: &str) -> Result<Vec<Line>> {
    src.lines()
        .enumerate()
        .map(|(idx, raw)| Line::parse(idx + 1, raw))
        .collect()
}

// ----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn line(raw: &str) -> Line {
        Line::parse(1, raw).unwrap()
    }

    fn err(raw: &str) -> Error {
        Line::parse(4, raw).unwrap_err()
    }

    #[test]
    fn splits_label_and_tokens() {
        let l = line("loop: add r1,r1, r1 # double");
        assert_eq!(l.label(), Some("loop"));
        assert_eq!(l.tokens, vec!["add", "r1", "r1", "r1"]);
        assert_eq!(l.operands(), ["r1", "r1", "r1"]);
        assert_eq!(l.comment(), Some(" double"));
        assert!(l.is_valid());
    }

    #[test]
    fn blank_and_comment_lines_are_empty() {
        for raw in ["", "   ", "# only a comment", "\t#"] {
            let l = line(raw);
            assert_eq!(l.kind(), LineKind::Empty, "{raw:?}");
            assert!(!l.is_valid());
            assert_eq!(l.mnemonic(), None);
        }
    }

    #[test]
    fn label_only_line() {
        let l = line("end:");
        assert_eq!(l.label(), Some("end"));
        assert_eq!(l.kind(), LineKind::Empty);
    }

    #[test]
    fn directives_do_not_emit() {
        let l = line("five: .fill 5");
        assert_eq!(l.kind(), LineKind::Directive);
        assert!(!l.is_valid());
        assert_eq!(l.tokens, vec![".fill", "5"]);
    }

    #[test]
    fn colon_inside_comment_is_ignored() {
        let l = line("add r1, r2, r3 # note: fine");
        assert_eq!(l.label(), None);
        assert!(l.is_valid());
    }

    macro_rules! bad_label {
        ($($name:ident: $raw:expr => $msg:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let e = err($raw);
                    assert_eq!(e.kind, ErrorKind::Preprocessor);
                    assert_eq!(e.line, Some(4));
                    assert!(e.msg.contains($msg), "{}", e.msg);
                }
            )*
        }
    }

    bad_label! {
        label_empty: ": add r1, r1, r1" => "empty",
        label_with_space: "my label: nop" => "delimiters",
        label_with_comma: "a,b: nop" => "delimiters",
        label_multiple_colons: "a: b: nop" => "Multiple",
        label_leading_digit: "1st: nop" => "starts with",
        label_leading_minus: "-x: nop" => "starts with",
        label_reserved: "r3: nop" => "reserved",
        label_reserved_upper: "R0: nop" => "reserved",
    }

    #[test]
    fn parse_source_numbers_lines_from_one() {
        let lines = parse_source("nop\n\nhalt\n").unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[2].no(), 3);
        assert_eq!(lines[2].mnemonic(), Some("halt"));
    }

    #[test]
    fn parse_source_stops_at_first_error() {
        let e = parse_source("nop\n1a: nop\n2b: nop").unwrap_err();
        assert_eq!(e.line, Some(2));
    }
}
