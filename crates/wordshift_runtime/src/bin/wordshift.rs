//! Wordshift CLI entry point.

use std::env;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use wordshift_runtime::{Repl, RunConfig, Session};

/// CLI flags parsed from arguments.
#[derive(Default)]
struct CliArgs {
    rules: Option<String>,
    words: Option<String>,
    interactive: bool,
    show_help: bool,
    show_version: bool,
    quiet: bool,
    trace_rules: bool,
    trace_expansion: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliArgs, Box<dyn std::error::Error>> {
    let mut cli = CliArgs::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => cli.show_help = true,
            "-V" | "--version" => cli.show_version = true,
            "-i" | "--interactive" => cli.interactive = true,
            "-q" | "--quiet" => cli.quiet = true,
            "--trace" => cli.trace_rules = true,
            "--trace-expansion" => cli.trace_expansion = true,
            flag if flag.starts_with('-') => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ if cli.rules.is_none() => cli.rules = Some(arg.clone()),
            _ if cli.words.is_none() => cli.words = Some(arg.clone()),
            _ => return Err(format!("unexpected argument: {arg}").into()),
        }
    }

    Ok(cli)
}

fn build_config(cli: &CliArgs) -> Result<RunConfig, Box<dyn std::error::Error>> {
    let rules = cli.rules.as_deref().ok_or("missing RULES argument (see --help)")?;
    if cli.words.is_none() && !cli.interactive {
        return Err("missing WORDS argument (or use -i for interactive mode)".into());
    }

    let mut config = RunConfig::new(rules)
        .with_interactive(cli.interactive)
        .with_diagnostics(!cli.quiet)
        .with_trace_rules(cli.trace_rules)
        .with_trace_expansion(cli.trace_expansion);
    if let Some(words) = &cli.words {
        config = config.with_words(words);
    }
    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("wordshift {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let config = build_config(&cli)?;
    init_logger(&config);

    let mut session = Session::load(&config).map_err(|e| match &e.context {
        Some(ctx) => format!("{e} {ctx}"),
        None => e.to_string(),
    })?;

    if config.words_path.is_some() {
        let mut out = BufWriter::new(io::stdout().lock());
        for word in session.run() {
            writeln!(out, "{word}")?;
        }
        out.flush()?;

        let skipped = session.diagnostics().skipped();
        if config.show_diagnostics && skipped > 0 {
            eprintln!("\x1b[33m{skipped} rule(s) skipped, see warnings above\x1b[0m");
        }
    }

    if config.interactive {
        let mut repl = Repl::new(session)?;
        if config.words_path.is_some() {
            repl = repl.without_banner();
        }
        repl.run()?;
    }

    Ok(())
}

fn init_logger(config: &RunConfig) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn print_help() {
    println!(
        "\x1b[1mWordshift\x1b[0m - Apply sound-change rules to a word list

\x1b[1mUSAGE:\x1b[0m
    wordshift [OPTIONS] RULES [WORDS]

\x1b[1mARGUMENTS:\x1b[0m
    RULES    Ruleset file ($GROUP, $SUBST, $POST sections)
    WORDS    Word list, one word per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help           Print help information
    -V, --version        Print version information
    -i, --interactive    Start a REPL after any batch run
    -q, --quiet          Do not report skipped rules

\x1b[1mDEBUG OPTIONS:\x1b[0m
    --trace              Log each rule and its concrete pairs
    --trace-expansion    Log every template expansion step

Log output honours RUST_LOG.

\x1b[1mEXAMPLES:\x1b[0m
    wordshift rules.txt words.txt           Print transformed words
    wordshift -i rules.txt                  Transform words interactively
    wordshift --trace rules.txt words.txt   Show every applied rule"
    );
}
