use std::{fs, path::{Path, PathBuf}, process::Command, rc::Rc, time::Instant};

use anyhow::{bail, Context};
use chalkc::{
    compiler::compiler::generate,
    errors::errors::CompileError,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::parse,
    type_checker::type_checker::type_check,
};
use clap::{ArgAction, Parser};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "chalkc")]
#[command(about = "Compiles Chalk source files to C")]
#[command(version)]
struct Args {
    /// Path to the Chalk source file
    input: PathBuf,

    /// Where to write the generated C (defaults to INPUT with a .c extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the parsed AST before type checking
    #[arg(long)]
    dump_ast: bool,

    /// Only run the type checker, write nothing
    #[arg(long)]
    check: bool,

    /// Build an executable with this C compiler after writing the C file
    #[arg(long, value_name = "CC")]
    cc: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read '{}'", args.input.display()))?;
    let file_name = args
        .input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.input.display().to_string());

    let generated = match compile(&args, &source, &file_name) {
        Ok(generated) => generated,
        Err(error) => {
            eprintln!("-> {}", args.input.display());
            eprintln!("{}", format_error(&error, &source));
            std::process::exit(1);
        }
    };

    let Some(generated) = generated else {
        println!("{}: no errors found", file_name);
        return Ok(());
    };

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.input.with_extension("c"));
    fs::write(&output, &generated)
        .with_context(|| format!("failed to write '{}'", output.display()))?;
    info!(path = %output.display(), "wrote C source");

    if let Some(cc) = &args.cc {
        build_executable(cc, &output)?;
    }

    Ok(())
}

/// Runs the pipeline stage by stage. Returns `None` when only checking.
fn compile(args: &Args, source: &str, file_name: &str) -> Result<Option<String>, CompileError> {
    let start = Instant::now();

    let tokens = tokenize(source.to_string(), Some(file_name.to_string()))?;
    info!("Tokenized in {:?}", start.elapsed());

    let parse_start = Instant::now();
    let program = parse(tokens, Rc::new(file_name.to_string()))?;
    info!("Parsed in {:?}", parse_start.elapsed());

    if args.dump_ast {
        println!("{:#?}", program);
    }

    let type_check_start = Instant::now();
    let typed = type_check(&program)?;
    info!("Type checked in {:?}", type_check_start.elapsed());

    if args.check {
        return Ok(None);
    }

    let generate_start = Instant::now();
    let generated = generate(&typed);
    info!("Generated C in {:?}", generate_start.elapsed());
    info!("Total time: {:?}", start.elapsed());

    Ok(Some(generated))
}

fn build_executable(cc: &str, c_file: &Path) -> anyhow::Result<()> {
    let mut executable = c_file.with_extension("");
    if executable == c_file {
        executable = c_file.with_extension("out");
    }
    debug!(cc, executable = %executable.display(), "invoking C compiler");

    let start = Instant::now();
    let result = Command::new(cc)
        .arg(c_file)
        .arg("-o")
        .arg(&executable)
        .output()
        .with_context(|| format!("failed to run '{}'", cc))?;

    if !result.status.success() {
        bail!(
            "'{}' failed to compile '{}':\n{}",
            cc,
            c_file.display(),
            String::from_utf8_lossy(&result.stderr)
        );
    }

    info!("Compiled using {} in {:?}", cc, start.elapsed());
    println!("{}", executable.display());

    Ok(())
}
