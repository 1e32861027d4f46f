//! Command-line front end for `avrophonetic`.
//!
//! Transliterates the positional words, joined with spaces, or stdin line by line when no
//! text is given.

use avrophonetic::{grammar_from_file, validate, Converter, Mode};
use facet::Facet;
use std::io::{BufRead, Write};
use std::process::ExitCode;

/// Command-line arguments.
#[derive(Facet)]
struct Args {
    /// Use the BD typing shortcuts.
    #[facet(named, short = 'b')]
    #[facet(default)]
    bd: bool,

    /// Path to a JSON grammar replacing the embedded one.
    #[facet(named, short = 'g')]
    #[facet(default)]
    grammar: String,

    /// Validate the grammar before converting.
    #[facet(named)]
    #[facet(default)]
    validate: bool,

    /// Words to convert, joined with spaces; stdin is read when none are given.
    #[facet(positional)]
    #[facet(default)]
    text: Vec<String>,
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    let args: Args = match facet_args::from_slice(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let mode = if args.bd { Mode::Bd } else { Mode::Strict };
    let mut builder = Converter::builder().mode(mode);

    if !args.grammar.is_empty() {
        let grammar = grammar_from_file(&args.grammar)?;
        if args.validate {
            validate(&grammar)?;
            eprintln!(
                "info: grammar '{}' is valid ({} patterns)",
                args.grammar,
                grammar.patterns.len()
            );
        }
        builder = builder.grammar(grammar);
    } else if args.validate {
        eprintln!("warning: --validate has no effect without --grammar");
    }

    let converter = builder.build();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if !args.text.is_empty() {
        writeln!(out, "{}", converter.parse(&args.text.join(" ")))?;
        return Ok(());
    }

    for line in std::io::stdin().lock().lines() {
        writeln!(out, "{}", converter.parse(&line?))?;
    }
    Ok(())
}
