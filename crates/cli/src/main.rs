//! `NanoCalc` ALU command-line front end.
//!
//! This binary exposes the model and its verification environment. It performs:
//! 1. **Evaluate:** Compute one ALU operation and show the flags and packed `uo_out`.
//! 2. **Check:** Run built-in or file-based directed vectors through the pin-level model.
//! 3. **Fuzz:** Apply seeded random stimuli and check invariants against the reference.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use nanocalc_core::config::Config;
use nanocalc_core::sim::{Fuzzer, Suite, Testbench, load_vectors};
use nanocalc_core::soc::NanoCalcTop;
use nanocalc_core::{InputPolicy, Opcode, evaluate_raw};

#[derive(Parser, Debug)]
#[command(
    name = "nanocalc",
    author,
    version,
    about = "NanoCalc 4-bit ALU model and testbench",
    long_about = "Evaluate NanoCalc ALU operations or verify the pin-level model.\n\nExamples:\n  nanocalc eval 15 1 add\n  nanocalc check --suite edge-cases\n  nanocalc check --vectors vectors.json\n  nanocalc fuzz --iterations 10000 --seed 42"
)]
struct Cli {
    /// JSON configuration file (defaults are used when omitted).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one operation.
    Eval {
        /// Operand A (0-15).
        a: u8,
        /// Operand B (0-15; ignored by NOT and SHL).
        b: u8,
        /// Opcode: 0-7 or a mnemonic (add, sub, and, or, xor, not, shl, eq).
        op: String,
        /// Truncate out-of-range inputs instead of rejecting them.
        #[arg(long)]
        mask: bool,
    },

    /// Run directed test vectors against the pin-level model.
    Check {
        /// Built-in suite to run (ignored when --vectors is given).
        #[arg(long, value_enum, default_value_t = SuiteArg::All)]
        suite: SuiteArg,
        /// JSON file of vectors to run instead of a built-in suite.
        #[arg(long)]
        vectors: Option<PathBuf>,
    },

    /// Run seeded random stimuli against the pin-level model.
    Fuzz {
        /// Number of samples (overrides the config).
        #[arg(short, long)]
        iterations: Option<u64>,
        /// RNG seed (overrides the config).
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SuiteArg {
    Basic,
    AllOperations,
    EdgeCases,
    All,
}

impl From<SuiteArg> for Suite {
    fn from(arg: SuiteArg) -> Self {
        match arg {
            SuiteArg::Basic => Self::Basic,
            SuiteArg::AllOperations => Self::AllOperations,
            SuiteArg::EdgeCases => Self::EdgeCases,
            SuiteArg::All => Self::All,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::from_file(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    tracing::debug!(?config, "configuration loaded");

    let ok = match cli.command {
        Commands::Eval { a, b, op, mask } => cmd_eval(&config, a, b, &op, mask),
        Commands::Check { suite, vectors } => cmd_check(&config, suite.into(), vectors),
        Commands::Fuzz { iterations, seed } => cmd_fuzz(config, iterations, seed),
    };

    if !ok {
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Parses a numeric or mnemonic opcode into its raw encoding.
///
/// Numbers that fit in a byte are passed through unchecked so that the input
/// policy decides; wider numbers are rejected like wide operands are.
fn parse_op(op: &str) -> Result<u8, String> {
    let op = op.trim();
    if !op.is_empty() && op.bytes().all(|c| c.is_ascii_digit()) {
        return op
            .parse::<u8>()
            .map_err(|_| format!("opcode out of range: {op} (expected 0..=7)"));
    }
    op.parse::<Opcode>().map(Opcode::bits).map_err(|e| e.to_string())
}

/// Evaluates and prints one operation. Returns `false` on invalid input.
fn cmd_eval(config: &Config, a: u8, b: u8, op: &str, mask: bool) -> bool {
    let policy = if mask {
        InputPolicy::Mask
    } else {
        config.input.policy
    };
    let raw_op = match parse_op(op) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            return false;
        }
    };
    match evaluate_raw(a, b, raw_op, policy) {
        Ok(out) => {
            let op = Opcode::from_bits(raw_op);
            println!("{op} a={a} b={b}");
            println!("  {out}");
            println!("  uo_out = {:#010b}", out.to_uo_out());
            true
        }
        Err(e) => {
            eprintln!("Error: {e}");
            false
        }
    }
}

/// Runs directed vectors. Returns `false` on load error or any failure.
fn cmd_check(config: &Config, suite: Suite, vectors: Option<PathBuf>) -> bool {
    let (label, vectors) = match vectors {
        Some(path) => match load_vectors(&path) {
            Ok(v) => (path.display().to_string(), v),
            Err(e) => {
                eprintln!("Error: {e}");
                return false;
            }
        },
        None => (format!("suite {suite}"), suite.vectors()),
    };

    let mut bench = Testbench::new(NanoCalcTop::new(), config);
    let report = match bench.run(&vectors) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            return false;
        }
    };

    println!("[*] {} vectors from {label} on {}", vectors.len(), report.dut);
    for outcome in &report.outcomes {
        let mark = if outcome.passed() { "PASS" } else { "FAIL" };
        println!("  [{mark}] {}: {}", outcome.vector.description, outcome.observed);
        for m in &outcome.mismatches {
            println!("         {m}");
        }
    }
    println!("{}", report.stats);
    report.passed()
}

/// Runs the fuzzer. Returns `false` if any sample broke a property.
fn cmd_fuzz(mut config: Config, iterations: Option<u64>, seed: Option<u64>) -> bool {
    if let Some(n) = iterations {
        config.fuzz.iterations = n;
    }
    if let Some(s) = seed {
        config.fuzz.seed = s;
    }

    let fuzzer = Fuzzer::new(&config);
    let mut dut = NanoCalcTop::new();
    let report = fuzzer.run(&mut dut);

    println!(
        "[*] {} random samples (seed {:#x})",
        config.fuzz.iterations, report.seed
    );
    for v in &report.violations {
        let kinds: Vec<String> = v.kinds.iter().map(ToString::to_string).collect();
        println!(
            "  [FAIL] #{} ui_in={:#04x} uio_in={:#04x}: {} (expected {}): {}",
            v.iteration,
            v.inputs.ui_in,
            v.inputs.uio_in,
            v.observed,
            v.expected,
            kinds.join(", ")
        );
    }
    println!("{}", report.stats);
    report.passed()
}
