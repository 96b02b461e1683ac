use color_print::cprintln;

use sicasm::error::Error;
use sicasm::{listing, Assembler};

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
    #[clap(default_value = "main.sic")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "main.sic.obj")]
    output: String,

    /// Dump listings
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    let args: Args = Args::parse();
    println!("SIC Assembler by kanade-k-1228");

    if let Err(err) = run(&args) {
        cprintln!("<red,bold>error</>: {}", err);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    println!("1. Read Source and Scan Addresses");
    println!("  < {}", args.input);
    let source = std::fs::read_to_string(&args.input)
        .map_err(|err| Error::FileOpen(args.input.clone(), err))?;

    let mut asm = Assembler::new(arch::optab::OpTab::standard());
    let pass1 = asm.pass_one(&source)?;
    pass1.msgs.print(&args.input);
    println!("  - found #{} labels", pass1.symtab.len());

    println!("2. Resolve Symbols & Generate Records");
    let pass2 = asm.pass_two(&source)?;
    println!("  > {}", args.output);
    let object = pass2.object_program() + "\n";
    std::fs::write(&args.output, object)
        .map_err(|err| Error::FileWrite(args.output.clone(), err))?;

    if args.dump {
        listing::dump(&pass1, &pass2);
        println!("----------------------------------------------------");
    }
    Ok(())
}
