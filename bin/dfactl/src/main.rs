use std::{io::Read, process::ExitCode};

use dfa_lab::prelude::*;

use tracing::{debug, trace};
use tracing_subscriber::{filter, prelude::*};

use clap::{Arg, ArgMatches, Command};

fn cli() -> clap::Command {
    Command::new("dfactl")
    .about("Validate, simulate and probe deterministic finite automata")
    .subcommand_required(true)
    .arg(
        Arg::new("verbosity")
        .short('v')
        .long("verbosity")
        .num_args(0..=1)
        .require_equals(true)
        .value_parser(["info", "debug", "trace"])
        .default_missing_value("info")
        .global(true)
    )
    .arg(
        Arg::new("file")
        .short('f')
        .long("file")
        .help("definition in text or JSON format, read from stdin if absent")
        .global(true)
    )
    .arg(
        Arg::new("seed")
        .long("seed")
        .value_parser(clap::value_parser!(u64))
        .help("seed for generating words")
        .global(true)
    )
    .subcommand(Command::new("check").about("validates the definition and reports all violations"))
    .subcommand(
        Command::new("run")
        .about("simulates the automaton on an input and prints the trace")
        .arg(Arg::new("input").required(true))
    )
    .subcommand(
        Command::new("path")
        .about("prints a shortest word leading from one state to another")
        .arg(Arg::new("from").required(true))
        .arg(Arg::new("to").required(true))
    )
    .subcommand(Command::new("accept").about("prints a word that is accepted"))
    .subcommand(Command::new("reject").about("prints a word that is rejected"))
    .subcommand(
        Command::new("suite")
        .about("runs every line of a file as input")
        .arg(Arg::new("inputs").required(true))
        .arg(Arg::new("csv").long("csv").num_args(0).help("print results as CSV"))
    )
    .subcommand(
        Command::new("export")
        .about("writes the definition in the given format")
        .arg(
            Arg::new("format")
            .long("format")
            .value_parser(["text", "json"])
            .default_value("text")
        )
    )
}

fn setup_logging(matches: &ArgMatches) {
    let level = match matches
        .try_get_one::<String>("verbosity")
        .ok()
        .flatten()
        .map(|m| m.as_str())
    {
        Some("trace") => filter::LevelFilter::TRACE,
        Some("debug") => filter::LevelFilter::DEBUG,
        Some("info") => filter::LevelFilter::INFO,
        _ => filter::LevelFilter::WARN,
    };

    let stderr_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(stderr_log.with_filter(level))
        .init();

    trace!("setup {level} logging");
}

fn read_source(matches: &ArgMatches) -> Result<String, String> {
    match matches.get_one::<String>("file") {
        Some(path) => {
            debug!("reading definition from {path}");
            std::fs::read_to_string(path).map_err(|e| format!("could not read {path}: {e}"))
        }
        None => {
            debug!("reading definition from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| format!("could not read stdin: {e}"))?;
            Ok(buf)
        }
    }
}

/// Loads an automaton, definitions starting with `{` are treated as JSON.
fn load(source: &str) -> Result<Dfa, FormatError> {
    if source.trim_start().starts_with('{') {
        Dfa::from_json(source)
    } else {
        parse(source)
    }
}

fn oracle<'a>(dfa: &'a Dfa, matches: &ArgMatches) -> Oracle<'a> {
    match matches.get_one::<u64>("seed") {
        Some(seed) => Oracle::with_seed(dfa, *seed),
        None => Oracle::new(dfa),
    }
}

fn execute(matches: &ArgMatches) -> Result<(), String> {
    let source = read_source(matches)?;

    if let Some(("check", _)) = matches.subcommand() {
        // parsing stops at the first violation, so deserialize without validating to list them all
        let violations = match Dfa::from_json(&source) {
            Err(FormatError::Json(_)) => parse(&source).err().into_iter().map(|e| e.to_string()).collect(),
            Err(e) => match serde_json::from_str::<Dfa>(&source) {
                Ok(dfa) => validate(&dfa).iter().map(ToString::to_string).collect(),
                Err(_) => vec![e.to_string()],
            },
            Ok(_) => vec![],
        };
        if violations.is_empty() {
            println!("ok");
            return Ok(());
        }
        return Err(violations.join("\n"));
    }

    let dfa = load(&source).map_err(|e| e.to_string())?;
    debug!("loaded automaton with {} states", dfa.states().len());

    match matches.subcommand() {
        Some(("run", sub)) => {
            let input = sub.get_one::<String>("input").map(String::as_str).unwrap_or_default();
            let result = dfa.simulate(input);
            for step in &result.steps {
                println!("{}\t{}", step.position, step.current_state);
            }
            println!("{}", if result.accepted { "accepted" } else { "rejected" });
        }
        Some(("path", sub)) => {
            let from = sub.get_one::<String>("from").map(String::as_str).unwrap_or_default();
            let to = sub.get_one::<String>("to").map(String::as_str).unwrap_or_default();
            match shortest_path(&dfa, from, to) {
                Some(word) => println!("{word}"),
                None => return Err(format!("no path found from {from} to {to}")),
            }
        }
        Some(("accept", _)) => println!("{}", oracle(&dfa, matches).accepted()),
        Some(("reject", _)) => println!("{}", oracle(&dfa, matches).rejected()),
        Some(("suite", sub)) => {
            let path = sub.get_one::<String>("inputs").map(String::as_str).unwrap_or_default();
            let inputs = std::fs::read_to_string(path)
                .map_err(|e| format!("could not read {path}: {e}"))?;
            let report = TestSuite::from_lines(&inputs).run(&dfa);
            if sub.get_flag("csv") {
                print!("{}", report.to_csv());
            } else {
                println!("{report}");
            }
        }
        Some(("export", sub)) => match sub.get_one::<String>("format").map(String::as_str) {
            Some("json") => println!("{}", dfa.to_json()),
            _ => println!("{}", dfa.to_text()),
        },
        _ => unreachable!(),
    }
    Ok(())
}

pub fn main() -> ExitCode {
    let matches = cli().get_matches();

    setup_logging(&matches);

    match execute(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}
