use color_print::cprintln;
use hackasm::{assembler, dump, output, source, symbol::Kind};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {author}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(author, version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.asm")]
    input: String,

    /// Output file [default: input with .hack extension]
    #[clap(short, long)]
    output: Option<String>,

    /// Dump assembly listing
    #[clap(short, long)]
    dump: bool,

    /// Write the symbol table as YAML
    #[clap(short, long)]
    symbols: Option<String>,

    /// Print every line as it is encoded
    #[clap(short, long)]
    verbose: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("Hack Assembler");

    println!("1. Read & Clean");
    println!("  < {}", args.input);
    let lines = source::read(&args.input).unwrap_or_else(|e| fail(e));
    println!("  - {} lines of code", lines.len());

    println!("2. Resolve Labels & Encode");
    let program = match assembler::assemble(lines, args.verbose) {
        Ok(program) => program,
        Err(e) => {
            e.print_diag(&args.input);
            std::process::exit(1);
        }
    };
    println!(
        "  - {} instructions, {} labels, {} variables",
        program.insts.len(),
        program.symbols.count(Kind::Label),
        program.symbols.count(Kind::Variable)
    );

    println!("3. Write");
    let out = args.output.unwrap_or_else(|| output::hack_path(&args.input));
    println!("  > {}", out);
    output::write_hack(&out, &program.words()).unwrap_or_else(|e| fail(e));
    if let Some(path) = &args.symbols {
        println!("  > {}", path);
        output::write_symbols(path, &program.symbols).unwrap_or_else(|e| fail(e));
    }

    if args.dump {
        dump::print(&program);
    }
    cprintln!("<green,bold>done</>");
}

fn fail(e: hackasm::error::Error) -> ! {
    e.print();
    std::process::exit(1);
}
