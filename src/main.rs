use std::{
    fs,
    io::{self, BufReader},
    path::PathBuf,
};

use clap::Parser;
use symbex::Expression;
use tracing::Level;

/// symbex evaluates arithmetic expressions over scalar and array symbols whose
/// values come from a record file.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells symbex to read the expression from a file instead of the command
    /// line.
    #[arg(short, long)]
    file: bool,

    /// Value records to bind before evaluating. Use `-` to read standard
    /// input.
    #[arg(short, long, value_name = "PATH")]
    values: Option<PathBuf>,

    /// Prints every scalar and array symbol with its bound value before the
    /// result.
    #[arg(short, long)]
    symbols: bool,

    /// Logs discovery, binding and evaluation steps to standard error.
    #[arg(long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt().with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
                             .with_writer(io::stderr)
                             .init();

    if let Err(e) = run(args) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let source = if args.file {
        fs::read_to_string(&args.contents).map_err(|e| {
                                               format!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                                                       &args.contents)
                                           })?
    } else {
        args.contents
    };

    let mut expression = Expression::new(&source);
    expression.build_symbols();

    match args.values.as_deref() {
        Some(path) if path.as_os_str() == "-" => {
            expression.load_symbol_values(io::stdin().lock())?;
        },
        Some(path) => {
            let file = fs::File::open(path).map_err(|e| {
                                               format!("Failed to read the values file '{}'. ({e})",
                                                       path.display())
                                           })?;
            expression.load_symbol_values(BufReader::new(file))?;
        },
        None => {},
    }

    if args.symbols {
        let symbols = expression.symbols();
        for scalar in &symbols.scalars {
            println!("{scalar}");
        }
        for array in &symbols.arrays {
            println!("{array}");
        }
    }

    println!("{}", expression.evaluate()?);
    Ok(())
}
