use std::{
    fs,
    io::{self, Write},
    process::ExitCode,
};

use aritmetica_natural::{
    Analysis, analyze_full, analyzer::semantic::environment::VariableEnvironment,
};
use clap::Parser;

/// aritmetica-natural analyses Spanish sentences describing arithmetic, such
/// as "suma 5 y 3" or "x = eleva dos a tres", and prints their expression
/// trees.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the contents as the path of a file with one sentence per line.
    /// All lines share the same variable definitions.
    #[arg(short, long)]
    file: bool,

    /// Also print every recognized token with its internal value.
    #[arg(short, long)]
    tokens: bool,

    /// Skip the semantic checks.
    #[arg(short, long)]
    skip_semantics: bool,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let sentences: Vec<String> = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(text) => text.lines()
                            .map(str::trim)
                            .filter(|line| !line.is_empty())
                            .map(str::to_string)
                            .collect(),
            Err(_) => {
                eprintln!("No se pudo leer el archivo '{}'. ¿Existe el archivo?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        vec![args.contents.clone()]
    };

    let mut environment = VariableEnvironment::new();
    let mut all_valid = true;
    let mut out = io::stdout().lock();

    for sentence in &sentences {
        let analysis = analyze_full(sentence, &mut environment);

        if !analysis.lexical.is_clean() {
            eprintln!("Elementos no reconocidos: {:?}", analysis.lexical.unrecognized_texts());
        }

        if let Err(e) = render(&mut out, &analysis, &args) {
            eprintln!("No se pudo escribir el resultado: {e}");
            return ExitCode::FAILURE;
        }

        let valid = if args.skip_semantics {
            analysis.syntactic.is_ok()
        } else {
            analysis.is_valid()
        };
        all_valid &= valid;
    }

    if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE }
}

/// Writes the report for one sentence.
fn render(out: &mut impl Write, analysis: &Analysis, args: &Args) -> io::Result<()> {
    writeln!(out, "ANÁLISIS DE LA EXPRESIÓN: {}\n", analysis.lexical.source)?;

    if args.tokens {
        writeln!(out, "ANÁLISIS LÉXICO:\nTokens reconocidos:")?;
        for token in &analysis.lexical.tokens {
            writeln!(out,
                     "  {:?}: '{}' (valor interno: '{}')",
                     token.kind, token.original, token.normalized)?;
        }
        writeln!(out)?;
    }

    writeln!(out, "ANÁLISIS SINTÁCTICO:")?;
    match &analysis.syntactic {
        Ok(statements) => {
            writeln!(out, "La expresión es sintácticamente válida")?;
            for (i, statement) in statements.iter().enumerate() {
                writeln!(out, "\nInstrucción {}:\n  Árbol de expresión: {statement}", i + 1)?;
            }
        },
        Err(error) => {
            writeln!(out,
                     "Se encontró un error sintáctico:\n  Descripción: {error}\n  Tipo de error: \
                      {}\n  Sugerencia: {}",
                     error.category(),
                     error.suggestion())?;
        },
    }

    if !args.skip_semantics {
        writeln!(out, "\nANÁLISIS SEMÁNTICO:")?;
        if analysis.semantic.is_valid() {
            writeln!(out, "La expresión es semánticamente válida.")?;
        } else {
            writeln!(out, "Se encontraron errores semánticos:")?;
            for message in analysis.semantic.messages() {
                writeln!(out, "- {message}")?;
            }
        }
    }

    writeln!(out)
}
