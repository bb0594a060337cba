use color_print::cprintln;
use std::path::PathBuf;

/// Decode a `.data` word file back into assembly.
#[derive(Debug, clap::Parser)]
#[clap(version, about)]
struct Args {
    /// Word file, one 16-digit binary word per line
    input: PathBuf,

    /// Log more (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    env_logger::builder()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        })
        .format_target(false)
        .format_timestamp(None)
        .init();

    let path = args.input.display().to_string();
    let text = match std::fs::read_to_string(&args.input) {
        Ok(text) => text,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}: {}", path, e);
            std::process::exit(1);
        }
    };

    match risc16asm::disassemble(&text) {
        Ok(insts) => {
            log::debug!("decoded {} words", insts.len());
            // unused bits stay visible in the word column
            let words = text.lines().map(str::trim).filter(|line| !line.is_empty());
            for (addr, (word, inst)) in words.zip(&insts).enumerate() {
                cprintln!("<green>{:04X}</>  {}  {}", addr, word, inst.cformat());
            }
        }
        Err(err) => {
            let raw = err
                .line
                .and_then(|no| text.lines().nth(no.saturating_sub(1)))
                .unwrap_or("");
            err.print_diag(&path, raw);
            std::process::exit(1);
        }
    }
}
