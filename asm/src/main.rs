use color_print::cprintln;
use risc16asm::{util, Assembler};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Assembly source file
    source: PathBuf,

    /// Output file [default: source with a `.data` extension]
    dest: Option<PathBuf>,

    /// Dump the assembled listing
    #[clap(short, long)]
    dump: bool,

    /// Print the symbol table
    #[clap(short, long)]
    symbols: bool,

    /// Log more (-v debug, -vv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn main() {
    use clap::Parser;

    let args = Args::parse();
    setup_logging(args.verbose);

    let dest = args
        .dest
        .clone()
        .unwrap_or_else(|| args.source.with_extension("data"));
    let source_name = args.source.display().to_string();

    println!("Source      : {}", source_name);
    println!("Destination : {}", dest.display());

    let src = match std::fs::read_to_string(&args.source) {
        Ok(src) => src,
        Err(e) => {
            cprintln!("<red,bold>error</>: Failed to open file: {}: {}", source_name, e);
            std::process::exit(1);
        }
    };

    let mut assembler = Assembler::new();
    let result = assembler.assemble(&src);

    for warning in assembler.warnings() {
        warning.print(&source_name);
    }

    let program = match result {
        Ok(program) => program,
        Err(err) => {
            let raw = err
                .line
                .and_then(|no| src.lines().nth(no.saturating_sub(1)))
                .unwrap_or("");
            err.print_diag(&source_name, raw);
            std::process::exit(1);
        }
    };

    if args.symbols {
        util::print_symbols(&program.labels);
    }
    if args.dump {
        util::print_dump(&source_name, &program);
    }

    let text = program.to_text();
    print!("{}", text);

    if let Err(e) = std::fs::write(&dest, &text) {
        cprintln!("<red,bold>error</>: Failed to write file: {}: {}", dest.display(), e);
        std::process::exit(1);
    }
}
