//! Command-line front end.
//!
//! ```bash
//! u-cpusched --policy rr --quantum 2 --input processes.json
//! u-cpusched --policy srtf --generate 8 --seed 7 --format json
//! cat request.json | u-cpusched
//! ```
//!
//! Input is either a JSON array of processes or a full request object
//! (`{"policy": ..., "quantum": ..., "processes": [...]}`); flags override
//! the request's policy and quantum.

use std::error::Error;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use serde::Deserialize;

use u_cpusched::models::{PolicyKind, Process};
use u_cpusched::workload::{generate, WorkloadConfig};
use u_cpusched::{SimulationRequest, SimulationResult};

/// Uniprocessor CPU scheduling simulator.
#[derive(Debug, Parser)]
#[command(name = "u-cpusched")]
#[command(version, about)]
struct Cli {
    /// Policy: fcfs, sjf-nonpreemptive (sjf-np), sjf-preemptive (srtf), priority, round-robin (rr)
    #[arg(short, long, env = "U_CPUSCHED_POLICY", value_parser = PolicyKind::from_str)]
    policy: Option<PolicyKind>,

    /// Time quantum for round-robin
    #[arg(short, long, env = "U_CPUSCHED_QUANTUM")]
    quantum: Option<i64>,

    /// JSON workload file (reads stdin when omitted)
    #[arg(short, long, conflicts_with = "generate")]
    input: Option<PathBuf>,

    /// Generate N random processes instead of reading input
    #[arg(long, value_name = "N")]
    generate: Option<usize>,

    /// Seed for --generate
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Accepted shapes of a workload file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WorkloadFile {
    Request(SimulationRequest),
    Processes(Vec<Process>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let request = build_request(cli)?;
    let result = request.run()?;

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", render_text(&result)),
    }
    Ok(())
}

fn build_request(cli: &Cli) -> Result<SimulationRequest, Box<dyn Error>> {
    let (processes, file_policy, file_quantum) = if let Some(count) = cli.generate {
        let config = WorkloadConfig::default().with_count(count).with_seed(cli.seed);
        (generate(&config), None, None)
    } else {
        let text = match &cli.input {
            Some(path) => fs::read_to_string(path)?,
            None => {
                let mut buf = String::new();
                io::stdin().read_to_string(&mut buf)?;
                buf
            }
        };
        match serde_json::from_str::<WorkloadFile>(&text)? {
            WorkloadFile::Request(r) => (r.processes, Some(r.policy), r.quantum),
            WorkloadFile::Processes(p) => (p, None, None),
        }
    };

    let policy = cli
        .policy
        .or(file_policy)
        .ok_or("no policy given (use --policy or a request file)")?;

    Ok(SimulationRequest {
        processes,
        policy,
        quantum: cli.quantum.or(file_quantum),
    })
}

fn render_text(result: &SimulationResult) -> String {
    let mut out = String::new();

    out.push_str("Timeline\n");
    for s in &result.timeline {
        out.push_str(&format!("  [{:>4} - {:>4}) {}\n", s.start, s.end, s.occupant));
    }

    out.push_str(&format!(
        "\n{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}\n",
        "Process", "Arrival", "Burst", "Priority", "Completion", "Turnaround", "Waiting", "Response"
    ));
    for r in &result.processes {
        let priority = r.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        out.push_str(&format!(
            "{:<8} {:>7} {:>5} {:>8} {:>10} {:>10} {:>7} {:>8}\n",
            r.id,
            r.arrival_time,
            r.burst_time,
            priority,
            r.completion_time,
            r.turnaround_time,
            r.waiting_time,
            r.response_time
        ));
    }

    let kpi = result.kpi();
    out.push_str(&format!(
        "\nAverage turnaround time: {:.2}\nAverage waiting time:    {:.2}\n",
        result.average_turnaround, result.average_waiting
    ));
    out.push_str(&format!(
        "CPU utilization: {:.1}%  throughput: {:.3}/tick  context switches: {}\n",
        kpi.cpu_utilization * 100.0,
        kpi.throughput,
        kpi.context_switches
    ));
    out
}
