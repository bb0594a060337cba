use crate::assembler::Program;
use crate::label::Labels;
use color_print::cformat;

const RULE: &str = "-----------------------------+-----------------------------------------------------";

pub fn print_dump(path: &str, program: &Program) {
    let header = format!("{}+------[{}]", "-".repeat(29), path);
    println!("{}{}", header, "-".repeat(RULE.len().saturating_sub(header.len())));
    for line in &program.lines {
        let emitted: Vec<_> = program.code.iter().filter(|e| e.line == line.no()).collect();

        if emitted.is_empty() {
            println!("{:29}| {:>4}: {}", "", line.no(), line.cformat());
            continue;
        }

        // a pseudo instruction may take several words; the source goes on the first row
        for (idx, e) in emitted.iter().enumerate() {
            let word = e.inst.to_bin();
            let source = if idx == 0 {
                format!("{:>4}: {}", line.no(), line.cformat())
            } else {
                String::new()
            };
            println!(
                "[{}] {:04X} {:016b} | {:<32} {}",
                cformat!("<green>{:04X}</>", e.addr),
                word,
                word,
                e.inst.cformat(),
                source
            );
        }
    }
    println!("{}", RULE);
}

pub fn print_symbols(labels: &Labels) {
    println!("Symbols detected : {}", labels.len());
    for (name, line, _) in labels.iter() {
        println!("  {:>4}: {}", line, labels.cformat(name));
    }
}
