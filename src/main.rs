use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use u_checkout::checkout::{CheckoutKpi, CheckoutSystem, TracingObserver};
use u_checkout::logging::init_logger;
use u_checkout::render::TextRenderer;
use u_checkout::simulation::{self, Policy, SimulationConfig};
use u_checkout::CheckoutError;

#[derive(Parser, Debug)]
#[command(name = "u-checkout", about = "Route checkout customers to the least-loaded counter", version)]
struct Args {
    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json_logs: bool,

    /// Simulation configuration JSON file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a generated arrival stream.
    Simulate {
        /// Number of counters.
        #[arg(long)]
        counters: Option<usize>,

        /// Number of customers.
        #[arg(long)]
        customers: Option<usize>,

        /// Smallest item count per customer.
        #[arg(long)]
        min_items: Option<u32>,

        /// Largest item count per customer.
        #[arg(long)]
        max_items: Option<u32>,

        /// Random seed.
        #[arg(long)]
        seed: Option<u64>,

        /// Assignment policy.
        #[arg(long, value_enum, default_value_t = PolicyArg::Heap)]
        policy: PolicyArg,

        /// Print the full report as JSON instead of the KPI summary.
        #[arg(long)]
        summary_json: bool,
    },
    /// Read one item count per line from stdin.
    Interactive {
        /// Number of counters.
        #[arg(long)]
        counters: Option<usize>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PolicyArg {
    Heap,
    Linear,
}

impl From<PolicyArg> for Policy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Heap => Policy::Heap,
            PolicyArg::Linear => Policy::Linear,
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SimulationConfig> {
    match path {
        Some(path) => SimulationConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SimulationConfig::default()),
    }
}

fn print_kpi(out: &mut impl Write, kpi: &CheckoutKpi) -> io::Result<()> {
    writeln!(out, "---")?;
    writeln!(
        out,
        "{} customers, {} items across {} counters",
        kpi.total_customers, kpi.total_items, kpi.counters
    )?;
    writeln!(
        out,
        "load min {} / max {} / mean {:.2} (spread {})",
        kpi.min_load, kpi.max_load, kpi.mean_load, kpi.spread
    )
}

fn run_interactive(counters: usize) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut system = CheckoutSystem::new(counters, TextRenderer::new(stdout.lock()))?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match system.submit(&line) {
            Ok(_) => {}
            Err(CheckoutError::InvalidArrival { message }) => eprintln!("{message}"),
            Err(err) => return Err(err.into()),
        }
    }

    let kpi = CheckoutKpi::calculate(&system.snapshot());
    print_kpi(&mut system.into_observer().into_inner(), &kpi)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logger("u-checkout", args.json_logs);

    let mut config = load_config(args.config.as_ref())?;

    match args.command {
        Command::Simulate {
            counters,
            customers,
            min_items,
            max_items,
            seed,
            policy,
            summary_json,
        } => {
            if let Some(counters) = counters {
                config.counters = counters;
            }
            if let Some(customers) = customers {
                config.customers = customers;
            }
            if let Some(min_items) = min_items {
                config.min_items = min_items;
            }
            if let Some(max_items) = max_items {
                config.max_items = max_items;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }

            let stdout = io::stdout();
            if summary_json {
                let report = simulation::run(&config, policy.into(), TracingObserver)?;
                serde_json::to_writer_pretty(stdout.lock(), &report)?;
                println!();
            } else {
                let report =
                    simulation::run(&config, policy.into(), TextRenderer::new(stdout.lock()))?;
                print_kpi(&mut stdout.lock(), &report.kpi)?;
            }
        }
        Command::Interactive { counters } => {
            run_interactive(counters.unwrap_or(config.counters))?;
        }
    }

    Ok(())
}
