//! Blackjack Advice Binary
//!
//! Reads serialized tables, one per line, and reports the naive decision next
//! to the optimal one with its expected value.

use anyhow::Context;
use blackjack::hands::Decision;
use blackjack::solver::Outcome;
use blackjack::solver::Solver;
use blackjack::strategy::Naive;
use blackjack::strategy::Oracle;
use blackjack::strategy::Strategy;
use blackjack::table::Table;
use blackjack::HERO;
use clap::Parser;
use colored::Colorize;
use std::io::BufRead;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, help = "File of table lines (defaults to stdin)")]
    input: Option<std::path::PathBuf>,
    #[arg(short, long, default_value_t = 4, help = "Other seats dealt two cards before the hero")]
    others: usize,
    #[arg(short, long, help = "Solver worker threads (defaults to one per CPU)")]
    threads: Option<usize>,
    #[arg(short, long, help = "Print the expected value of every legal decision")]
    verbose: bool,
    #[arg(long, help = "Emit one JSON object per line instead of text")]
    json: bool,
}

#[derive(serde::Serialize)]
struct Advice<'a> {
    line: &'a str,
    naive: Decision,
    optimal: &'a Outcome,
}

fn main() -> anyhow::Result<()> {
    blackjack::log();
    let args = Args::parse();
    let solver = match args.threads {
        Some(n) => Solver::with_threads(n),
        None => Solver::new(),
    }
    .context("starting solver")?;
    let oracle = Oracle::from(solver);
    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };
    let mut advised = 0;
    for (n, line) in reader.lines().enumerate() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        let table = match Table::parse(&line, args.others) {
            Ok(table) => table,
            Err(e) => {
                log::warn!("skipping line {}: {}", n + 1, e);
                continue;
            }
        };
        let naive = Naive
            .decide(&table, HERO, 0)
            .with_context(|| format!("naive decision on line {}", n + 1))?;
        let optimal = oracle
            .evaluate(&table)
            .with_context(|| format!("solving line {}", n + 1))?;
        advised += 1;
        if args.json {
            let advice = Advice {
                line: &line,
                naive,
                optimal: &optimal,
            };
            println!("{}", serde_json::to_string(&advice)?);
        } else {
            report(&table, naive, &optimal, args.verbose);
        }
    }
    log::info!(
        "advised {} tables, {} positions evaluated, {} memoized",
        advised,
        oracle.solver().computed(),
        oracle.solver().len()
    );
    Ok(())
}

fn report(table: &Table, naive: Decision, optimal: &Outcome, verbose: bool) {
    let best = optimal
        .decision
        .map(|d| d.to_string())
        .unwrap_or_else(|| "-".to_string());
    let agree = match optimal.decision {
        Some(d) if d == naive => best.green(),
        _ => best.yellow(),
    };
    println!(
        "dealer {:<8} hero {:<14} naive {:<10} optimal {:<10} {:+.6}",
        table.dealer().to_string(),
        table
            .seat(HERO)
            .ok()
            .and_then(|hands| hands.first())
            .map(|h| h.to_string())
            .unwrap_or_default(),
        naive.to_string(),
        agree,
        optimal.value
    );
    if verbose {
        for (decision, value) in optimal.values.iter() {
            println!("    {:<10} {:+.6}", decision.to_string(), value);
        }
    }
}
