use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use crossterm::style::Stylize;
use dict_core::commands::{execute, parse_command, read_commands, run_script, Outcome};
use dict_core::config::DriverConfig;
use dict_core::corpus::load_corpus;
use dict_core::instrument::Timed;
use dict_core::sampling::sample_corpus;
use dict_core::{Backend, Dictionary, PrunePolicy};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

#[derive(Debug, Parser)]
#[command(about = "Word-frequency dictionary driver")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Build a dictionary from a corpus and run an operation script against it.
    Run {
        #[command(flatten)]
        dict: DictArgs,
        /// Operation script; read from stdin when omitted.
        #[arg(long)]
        commands: Option<PathBuf>,
        /// Print outcomes as JSON lines.
        #[arg(long)]
        json: bool,
        /// Print per-operation timings to stderr afterwards.
        #[arg(long)]
        timings: bool,
    },
    /// Write a random subset of a corpus to a new file.
    Sample {
        input: PathBuf,
        output: PathBuf,
        count: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Build a dictionary and query it interactively.
    Repl {
        #[command(flatten)]
        dict: DictArgs,
    },
}

#[derive(Debug, Args)]
struct DictArgs {
    /// Corpus file with one `word frequency` pair per line.
    corpus: PathBuf,
    /// JSON driver config; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, short)]
    backend: Option<Backend>,
    /// Prune dead trie nodes on delete.
    #[arg(long)]
    prune: bool,
    /// Skip malformed corpus lines.
    #[arg(long)]
    lenient: bool,
}

impl DictArgs {
    fn resolve(&self) -> Result<DriverConfig> {
        let mut config = match &self.config {
            Some(path) => DriverConfig::load(path)?,
            None => DriverConfig::default(),
        };
        if let Some(backend) = self.backend {
            config.backend = backend;
        }
        if self.prune {
            config.prune = PrunePolicy::Prune;
        }
        config.lenient |= self.lenient;
        Ok(config)
    }

    fn build(&self) -> Result<Timed<Box<dyn Dictionary>>> {
        let config = self.resolve()?;
        let entries = load_corpus(&self.corpus, config.lenient)
            .with_context(|| format!("error loading corpus {}", self.corpus.display()))?;
        let mut dict = Timed::new(config.backend.create(config.prune));
        dict.build_dictionary(entries)
            .context("error building dictionary")?;
        tracing::info!(backend = %config.backend, words = dict.len(), "dictionary ready");
        Ok(dict)
    }
}

fn main() -> Result<()> {
    // Logging setup
    let fmt_layer = fmt::layer().with_writer(io::stderr);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env()
        .context("error reading logging directives")?;
    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();

    match Cli::parse().command {
        Cmd::Run { dict, commands, json, timings } => run(&dict, commands, json, timings),
        Cmd::Sample { input, output, count, seed } => {
            let written = sample_corpus(&input, &output, count, seed)
                .with_context(|| format!("error sampling {}", input.display()))?;
            println!("Randomly selected {written} entries written to {}", output.display());
            Ok(())
        }
        Cmd::Repl { dict } => repl(&dict),
    }
}

fn run(args: &DictArgs, commands: Option<PathBuf>, json: bool, timings: bool) -> Result<()> {
    let mut dict = args.build()?;
    let script = match &commands {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("error opening script {}", path.display()))?;
            read_commands(BufReader::new(file))
        }
        None => read_commands(io::stdin().lock()),
    }
    .context("error reading operation script")?;

    let mut stdout = io::stdout().lock();
    for outcome in run_script(&mut dict, script) {
        if json {
            writeln!(stdout, "{}", serde_json::to_string(&outcome)?)?;
        } else {
            writeln!(stdout, "{outcome}")?;
        }
    }
    stdout.flush()?;

    if timings {
        eprint!("{}", dict.timings());
    }
    Ok(())
}

fn is_hit(outcome: &Outcome) -> bool {
    match outcome {
        Outcome::Search { frequency, .. } => *frequency > 0,
        Outcome::Add { added, .. } => *added,
        Outcome::Delete { deleted, .. } => *deleted,
        Outcome::Autocomplete { completions, .. } => !completions.is_empty(),
    }
}

fn repl(args: &DictArgs) -> Result<()> {
    let mut dict = args.build()?;
    let mut stdout = io::stdout();

    println!("{}", "Word-frequency dictionary. Type 'exit' to quit.".bold());
    println!("Commands: S word | A word freq | D word | AC [prefix] | stats");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines().enumerate();
    loop {
        print!("> ");
        stdout.flush()?;
        let Some((idx, line)) = lines.next() else { break };
        let input = line?;
        match input.trim() {
            "exit" | "quit" => break,
            "stats" => {
                println!("{} words", dict.len());
                print!("{}", dict.timings());
                continue;
            }
            _ => {}
        }
        match parse_command(&input, idx + 1) {
            Ok(Some(command)) => {
                let outcome = execute(&mut dict, command);
                if is_hit(&outcome) {
                    println!("{}", outcome.to_string().green());
                } else {
                    println!("{}", outcome.to_string().red());
                }
            }
            Ok(None) => {}
            Err(err) => println!("{}", err.to_string().yellow()),
        }
    }
    Ok(())
}
