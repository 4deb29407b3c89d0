//! # tally
//!
//! A CLI tool for counting values matching a predicate in numeric data.
//!
//! ## Overview
//!
//! tally is built on top of tallylib and provides a command-line interface
//! for counting the values of numeric data files (or stdin) that satisfy a
//! predicate expression. Inputs are JSON arrays or plain numeric text;
//! complex data stored as interleaved components and strided selections are
//! counted through tallylib's accessor views.
//!
//! ## Usage
//!
//! ```bash
//! # Count nonzero values (the default predicate)
//! tally data.json
//!
//! # Count values above a threshold
//! tally data.json --where ">0"
//!
//! # Count from stdin
//! seq 1 100 | tally --where ">=50"
//!
//! # Complex input: interleaved [re, im, re, im, ...] components
//! tally signal.json --complex --where "re>0,im>0"
//!
//! # Count every other value, starting at position 1
//! tally data.txt --stride 2 --offset 1 --where "nonzero"
//!
//! # Per-file breakdown, JSON output
//! tally a.json b.json --by-file --output json
//! ```

use std::io;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use tallylib::{
    read_values, read_values_from, summarize, ComplexSlice, ComplexTest, CountSummary,
    InputFormat, Strided, ValueTest,
};

mod render;

use render::{render_json, render_table, FileSummary, Report};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tally")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Arthur Debert")
        .about("Count values matching a predicate in numeric data files")
        .arg(
            Arg::new("file")
                .action(ArgAction::Append)
                .help("Data files to read (stdin when omitted)"),
        )
        .arg(
            Arg::new("where")
                .short('w')
                .long("where")
                .default_value("nonzero")
                .help("Predicate expression: '>0', 'finite', or 're>0,im>0' with --complex"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .value_parser(["auto", "json", "text"])
                .default_value("auto")
                .help("Input format"),
        )
        .arg(
            Arg::new("complex")
                .long("complex")
                .action(ArgAction::SetTrue)
                .help("Treat input as interleaved complex components [re, im, re, im, ...]"),
        )
        .arg(
            Arg::new("stride")
                .long("stride")
                .value_parser(clap::value_parser!(i64))
                .allow_hyphen_values(true)
                .conflicts_with("complex")
                .help("Count through a strided view with this step (may be negative)"),
        )
        .arg(
            Arg::new("offset")
                .long("offset")
                .value_parser(clap::value_parser!(u64))
                .default_value("0")
                .requires("stride")
                .help("First element position for --stride"),
        )
        .arg(
            Arg::new("by-file")
                .short('f')
                .long("by-file")
                .action(ArgAction::SetTrue)
                .help("Show a row per input file"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
}

/// Read all inputs as (name, values) pairs
fn read_inputs(matches: &ArgMatches, format: InputFormat) -> anyhow::Result<Vec<(String, Vec<f64>)>> {
    let files: Vec<String> = matches
        .get_many::<String>("file")
        .map(|v| v.cloned().collect())
        .unwrap_or_default();

    if files.is_empty() {
        let values = read_values_from(&mut io::stdin().lock(), format)?;
        return Ok(vec![("(stdin)".to_string(), values)]);
    }

    let mut inputs = Vec::new();
    for file in files {
        let values = read_values(&file, format)?;
        inputs.push((file, values));
    }
    Ok(inputs)
}

/// Number of elements reachable from `offset` stepping by `step` within a
/// buffer of `len` values. Zero steps are left for the view constructor to
/// reject.
fn strided_len(len: usize, step: i64, offset: usize) -> usize {
    if len == 0 || offset >= len || step == 0 {
        return 0;
    }
    if step > 0 {
        (len - offset).div_ceil(step as usize)
    } else {
        offset / step.unsigned_abs() as usize + 1
    }
}

/// Count one input's values against the predicate expression
fn count_values(
    values: &[f64],
    expr: &str,
    complex: bool,
    stride: Option<i64>,
    offset: usize,
) -> anyhow::Result<CountSummary> {
    if complex {
        let test: ComplexTest = expr.parse()?;
        let numbers = ComplexSlice::new(values)?;
        return Ok(summarize(&numbers, |z, _| test.matches(*z)));
    }

    let test: ValueTest = expr.parse()?;
    match stride {
        Some(step) => {
            let len = strided_len(values.len(), step, offset);
            let view = Strided::new(values, len, step as isize, offset)?;
            Ok(summarize(&view, |v, _| test.matches(*v)))
        }
        None => Ok(summarize(values, |v, _| test.matches(*v))),
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<String> {
    let format: InputFormat = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("auto")
        .parse()?;
    let expr = matches
        .get_one::<String>("where")
        .map(|s| s.as_str())
        .unwrap_or("nonzero");
    let complex = matches.get_flag("complex");
    let stride = matches.get_one::<i64>("stride").copied();
    let offset = matches.get_one::<u64>("offset").copied().unwrap_or(0) as usize;
    let by_file = matches.get_flag("by-file");
    let output = matches
        .get_one::<String>("output")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let inputs = read_inputs(matches, format)?;

    let mut files = Vec::new();
    let mut total = CountSummary::new();
    for (name, values) in &inputs {
        let summary = count_values(values, expr, complex, stride, offset)
            .with_context(|| format!("while counting '{}'", name))?;
        total += summary;
        files.push(FileSummary {
            name: name.clone(),
            summary,
        });
    }

    let report = Report {
        expr: expr.to_string(),
        files,
        total,
    };

    if output == "json" {
        Ok(render_json(&report)?)
    } else {
        Ok(render_table(&report, by_file))
    }
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    match run(&matches) {
        Ok(rendered) => {
            println!("{}", rendered);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
