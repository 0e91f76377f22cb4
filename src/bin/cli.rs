use std::io::IsTerminal;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

use ossim::common::types::Direction;
use ossim::disk::{run_disk_simulation, DiskResult, DiskStrategy};
use ossim::memory::{run_memory_simulation_with_config, MemoryResult, MemoryStrategy, StepAnnotation};
use ossim::report::{best_disk, best_memory, DiskSummary, MemorySummary};
use ossim::validation::{validate_disk_input, validate_memory_input};
use ossim::{DiskWorkload, MemoryWorkload, TraceConfig};

const HISTORY_FILE: &str = ".ossim_history";

#[derive(Parser)]
#[command(author, version, about = "ossim - step through page replacement and disk scheduling algorithms")]
struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive shell
    Shell,

    /// Simulate page replacement
    Memory(MemoryArgs),

    /// Simulate disk arm scheduling
    Disk(DiskArgs),
}

#[derive(Args)]
struct MemoryArgs {
    /// Strategy: lru, arb or all
    #[arg(short, long, default_value = "lru")]
    strategy: String,

    /// Number of physical frames
    #[arg(short, long, default_value = "3", allow_hyphen_values = true)]
    frames: String,

    /// Whitespace-separated page reference string
    #[arg(short, long, allow_hyphen_values = true)]
    refs: String,

    /// Print every step, not only the summary
    #[arg(short, long)]
    trace: bool,
}

#[derive(Args)]
struct DiskArgs {
    /// Strategy: look, cscan or all
    #[arg(short, long, default_value = "look")]
    strategy: String,

    /// Number of cylinders
    #[arg(short, long, default_value = "200", allow_hyphen_values = true)]
    cylinders: String,

    /// Initial head position
    #[arg(long, default_value = "50", allow_hyphen_values = true)]
    head: String,

    /// Comma-separated request queue
    #[arg(short, long, allow_hyphen_values = true)]
    queue: String,

    /// Initial arm direction: up or down
    #[arg(short, long, default_value = "up")]
    direction: Direction,

    /// Print every head movement, not only the summary
    #[arg(short, long)]
    trace: bool,
}

/// Output options shared by one-shot and shell mode
#[derive(Clone, Copy)]
struct Output {
    json: bool,
    trace: bool,
}

fn memory_strategies(text: &str) -> Result<Vec<MemoryStrategy>> {
    if text.eq_ignore_ascii_case("all") {
        return Ok(MemoryStrategy::ALL.to_vec());
    }
    let strategy = text.parse::<MemoryStrategy>().map_err(|e| anyhow!(e))?;
    Ok(vec![strategy])
}

fn disk_strategies(text: &str) -> Result<Vec<DiskStrategy>> {
    if text.eq_ignore_ascii_case("all") {
        return Ok(DiskStrategy::ALL.to_vec());
    }
    let strategy = text.parse::<DiskStrategy>().map_err(|e| anyhow!(e))?;
    Ok(vec![strategy])
}

fn summarize_memory(results: &[MemoryResult]) -> Vec<MemorySummary> {
    results.iter().map(MemorySummary::from).collect()
}

fn summarize_disk(results: &[DiskResult]) -> Vec<DiskSummary> {
    results.iter().map(DiskSummary::from).collect()
}

fn run_memory(strategies: &[MemoryStrategy], workload: &MemoryWorkload, out: Output) -> Result<()> {
    let config = TraceConfig { annotations: out.trace };
    let results: Vec<MemoryResult> = strategies
        .iter()
        .map(|&strategy| run_memory_simulation_with_config(strategy, workload, &config))
        .collect();

    if out.json {
        if results.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&results[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&summarize_memory(&results))?);
        }
        return Ok(());
    }

    for result in &results {
        if out.trace {
            display_memory_trace(result);
        }
        println!(
            "{}: {} faults, {} hits, hit ratio {:.2}%, fault ratio {:.2}%",
            result.strategy,
            result.faults,
            result.hits,
            result.hit_ratio() * 100.0,
            result.fault_ratio() * 100.0
        );
    }
    if results.len() > 1 {
        display_memory_comparison(&summarize_memory(&results));
    }
    Ok(())
}

fn run_disk(strategies: &[DiskStrategy], workload: &DiskWorkload, out: Output) -> Result<()> {
    let results: Vec<DiskResult> = strategies
        .iter()
        .map(|&strategy| run_disk_simulation(strategy, workload))
        .collect();

    if out.json {
        if results.len() == 1 {
            println!("{}", serde_json::to_string_pretty(&results[0])?);
        } else {
            println!("{}", serde_json::to_string_pretty(&summarize_disk(&results))?);
        }
        return Ok(());
    }

    for result in &results {
        if out.trace {
            display_disk_trace(result);
        }
        let sequence: Vec<String> = result.sequence.iter().map(|c| c.to_string()).collect();
        println!("{}: {}", result.strategy, sequence.join(" -> "));
        println!(
            "{}: seek distance {}, average {:.2} per request",
            result.strategy,
            result.seek_distance,
            result.average_seek()
        );
    }
    if results.len() > 1 {
        display_disk_comparison(&summarize_disk(&results));
    }
    Ok(())
}

fn frames_cell(frames: &[Option<u32>]) -> String {
    frames
        .iter()
        .map(|slot| slot.map_or_else(|| "-".to_string(), |page| page.to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn annotation_cell(annotation: &Option<StepAnnotation>) -> String {
    match annotation {
        Some(StepAnnotation::Lru { order_after, .. }) => {
            let order: Vec<String> = order_after.iter().map(|f| f.to_string()).collect();
            format!("lru order: {}", order.join(" "))
        }
        Some(StepAnnotation::Clock { bits_after, hand_after, full_revolution, .. }) => {
            let bits: String = bits_after.iter().map(|&b| if b { '1' } else { '0' }).collect();
            let reset = if *full_revolution { " (reset)" } else { "" };
            format!("bits: {} hand: {}{}", bits, hand_after, reset)
        }
        None => String::new(),
    }
}

fn display_memory_trace(result: &MemoryResult) {
    let headers = ["step", "ref", "frames", "result", "frame", "evicted", "state"];
    let rows: Vec<Vec<String>> = result
        .steps
        .iter()
        .enumerate()
        .map(|(i, step)| {
            vec![
                (i + 1).to_string(),
                step.reference.to_string(),
                frames_cell(&step.frames_after),
                if step.fault { "fault".to_string() } else { "hit".to_string() },
                step.replaced_frame.map_or_else(String::new, |f| f.to_string()),
                step.evicted_page.map_or_else(String::new, |p| p.to_string()),
                annotation_cell(&step.annotation),
            ]
        })
        .collect();
    println!("{} trace:", result.strategy);
    display_table(&headers, &rows);
}

fn display_disk_trace(result: &DiskResult) {
    let headers = ["step", "cylinder", "distance"];
    let mut rows = vec![vec!["0".to_string(), result.start.to_string(), String::new()]];
    for (i, mv) in result.moves().iter().enumerate() {
        let distance = if mv.wrap {
            "return (free)".to_string()
        } else {
            mv.distance.to_string()
        };
        rows.push(vec![(i + 1).to_string(), mv.to.to_string(), distance]);
    }
    println!("{} trace:", result.strategy);
    display_table(&headers, &rows);
}

fn display_memory_comparison(summaries: &[MemorySummary]) {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.strategy.to_string(),
                s.faults.to_string(),
                s.hits.to_string(),
                format!("{:.2}%", s.hit_ratio * 100.0),
                format!("{:.2}%", s.fault_ratio * 100.0),
            ]
        })
        .collect();
    display_table(&["strategy", "faults", "hits", "hit ratio", "fault ratio"], &rows);
    if let Some(best) = best_memory(summaries) {
        println!("Fewest faults: {}", best.strategy);
    }
}

fn display_disk_comparison(summaries: &[DiskSummary]) {
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            vec![
                s.strategy.to_string(),
                s.seek_distance.to_string(),
                s.requests_served.to_string(),
                format!("{:.2}", s.average_seek),
            ]
        })
        .collect();
    display_table(&["strategy", "seek distance", "served", "average seek"], &rows);
    if let Some(best) = best_disk(summaries) {
        println!("Least head travel: {}", best.strategy);
    }
}

fn display_table(headers: &[&str], rows: &[Vec<String>]) {
    // Minimum width of 3 characters per column
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len().max(3)).collect();
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            widths[i] = widths[i].max(value.len());
        }
    }

    print!("|");
    for (header, &width) in headers.iter().zip(&widths) {
        print!(" {:<width$} |", header, width = width);
    }
    println!();

    print!("+");
    for &width in &widths {
        print!("{:-<width$}+", "", width = width + 2);
    }
    println!();

    for row in rows {
        print!("|");
        for (value, &width) in row.iter().zip(&widths) {
            print!(" {:<width$} |", value, width = width);
        }
        println!();
    }

    println!("({} rows)", rows.len());
}

/// Execute one shell line. Returns false when the shell should exit.
fn execute_line(line: &str, json: bool) -> Result<bool> {
    let mut tokens = line.split_whitespace();
    let Some(command) = tokens.next() else {
        return Ok(true);
    };

    match command.to_lowercase().as_str() {
        "exit" | "quit" => {
            println!("Goodbye!");
            return Ok(false);
        }
        "help" => print_help(),
        "memory" | "mem" => {
            // memory <strategy> <frames> <reference...>
            let strategy = tokens.next().ok_or_else(|| anyhow!("usage: memory <lru|arb|all> <frames> <refs...>"))?;
            let frames = tokens.next().unwrap_or("");
            let refs = tokens.collect::<Vec<_>>().join(" ");
            let strategies = memory_strategies(strategy)?;
            let workload = validate_memory_input(frames, &refs)?;
            run_memory(&strategies, &workload, Output { json, trace: true })?;
        }
        "disk" => {
            // disk <strategy> <up|down> <cylinders> <head> <queue...>
            let strategy = tokens
                .next()
                .ok_or_else(|| anyhow!("usage: disk <look|cscan|all> <up|down> <cylinders> <head> <queue>"))?;
            let direction = tokens
                .next()
                .unwrap_or("")
                .parse::<Direction>()
                .map_err(|e| anyhow!(e))?;
            let cylinders = tokens.next().unwrap_or("");
            let head = tokens.next().unwrap_or("");
            let queue = tokens.collect::<Vec<_>>().join(" ");
            let strategies = disk_strategies(strategy)?;
            let workload = validate_disk_input(cylinders, head, &queue)?.with_direction(direction);
            run_disk(&strategies, &workload, Output { json, trace: true })?;
        }
        other => return Err(anyhow!("unknown command '{}', type 'help' for assistance", other)),
    }
    Ok(true)
}

fn run_shell(json: bool) -> Result<()> {
    println!("Welcome to the ossim shell. Type 'help' for assistance or 'exit' to quit.");

    let interactive = std::io::stdin().is_terminal();
    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if interactive {
        if let Err(err) = rl.load_history(HISTORY_FILE) {
            log::debug!("no shell history loaded: {}", err);
        }
    }

    loop {
        let readline = rl.readline("ossim> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);
                match execute_line(line.trim(), json) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => println!("Error: {}", err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if interactive {
        if let Err(err) = rl.save_history(HISTORY_FILE) {
            println!("Error saving history: {}", err);
        }
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  memory <lru|arb|all> <frames> <refs...>                  - Page replacement, e.g. memory lru 3 7 0 1 2 0");
    println!("  disk <look|cscan|all> <up|down> <cylinders> <head> <q>   - Disk scheduling, e.g. disk look up 200 50 82,170,43");
    println!();
    println!("Other commands:");
    println!("  help                          - Display this help message");
    println!("  exit                          - Exit the shell");
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Some(Commands::Memory(args)) => {
            let strategies = memory_strategies(&args.strategy)?;
            let workload = validate_memory_input(&args.frames, &args.refs).context("Invalid memory workload")?;
            run_memory(&strategies, &workload, Output { json: cli.json, trace: args.trace })?;
        }
        Some(Commands::Disk(args)) => {
            let strategies = disk_strategies(&args.strategy)?;
            let workload = validate_disk_input(&args.cylinders, &args.head, &args.queue)
                .context("Invalid disk workload")?
                .with_direction(args.direction);
            run_disk(&strategies, &workload, Output { json: cli.json, trace: args.trace })?;
        }
        Some(Commands::Shell) | None => {
            run_shell(cli.json)?;
        }
    }

    Ok(())
}
