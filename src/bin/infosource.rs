// SPDX-FileCopyrightText: 2025-2026 Carlson Büth <code@cbueth.de>
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use infosource::estimators::entropy::{Entropy, GlobalValue};
use infosource::io::{self, EntropyRecord};
use infosource::selftest;
use infosource::source::{ByteSource, UniformSampler, binary_extension};

#[derive(Parser)]
#[command(name = "infosource", about = "Simulate and measure a 256-symbol memoryless source")]
struct Args {
    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Generate a byte source from a probability distribution CSV")]
    Generate {
        /// Probability distribution, `symbol,probability` records
        input: PathBuf,
        /// Where to save the byte source
        output: PathBuf,
        /// Number of symbols to generate
        msg_len: usize,
        /// Save the CDF to this CSV file
        #[arg(short = 'F', long)]
        cdf_csv: Option<PathBuf>,
        /// Save the uniform draws to this CSV file
        #[arg(short = 'R', long)]
        rand_csv: Option<PathBuf>,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    #[command(about = "Write the 8-fold extension of a binary source as a distribution CSV")]
    Extend {
        /// Probability that one bit equals 1
        #[arg(allow_negative_numbers = true)]
        p_true: f64,
        path: PathBuf,
    },
    #[command(about = "Calculate the entropy of a file and append it to a results CSV")]
    Measure {
        input: PathBuf,
        /// Results CSV, created if absent
        output: PathBuf,
        /// Log the probability (p) or self-information (s) vector
        #[arg(short, long, value_enum)]
        method: Option<Method>,
        /// Export the probability vector to this CSV file
        #[arg(short = 'p', long)]
        export_p: Option<PathBuf>,
        /// Export the self-information vector to this CSV file
        #[arg(short = 's', long)]
        export_s: Option<PathBuf>,
    },
    #[command(about = "Run the built-in sanity checks")]
    SelfTest,
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    P,
    S,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    init_tracing(args.verbose);
    match args.command {
        Command::Generate {
            input,
            output,
            msg_len,
            cdf_csv,
            rand_csv,
            seed,
        } => run_generate(&input, &output, msg_len, cdf_csv, rand_csv, seed),
        Command::Extend { p_true, path } => run_extend(p_true, &path),
        Command::Measure {
            input,
            output,
            method,
            export_p,
            export_s,
        } => run_measure(&input, &output, method, export_p, export_s),
        Command::SelfTest => Ok(run_self_test()),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run_generate(
    input: &Path,
    output: &Path,
    msg_len: usize,
    cdf_csv: Option<PathBuf>,
    rand_csv: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<ExitCode> {
    let dist = io::load_distribution(input)
        .with_context(|| format!("failed to load distribution from {}", input.display()))?;
    let sampler = match seed {
        Some(seed) => UniformSampler::seeded(seed),
        None => UniformSampler::from_entropy(),
    };
    let mut source = ByteSource::new(&dist, sampler);

    if let Some(path) = &cdf_csv {
        io::save_column(path, &source.cdf().values())
            .with_context(|| format!("failed to write CDF to {}", path.display()))?;
        info!(path = %path.display(), "Saved CDF");
    }

    let generated = source.generate_with_draws(msg_len);
    if let Some(path) = &rand_csv {
        io::save_column(path, &generated.draws)
            .with_context(|| format!("failed to write draws to {}", path.display()))?;
        info!(path = %path.display(), "Saved random draws");
    }

    io::save_byte_source(output, &generated.symbols)
        .with_context(|| format!("failed to write byte source to {}", output.display()))?;
    debug!(path = %output.display(), symbols = msg_len, "Saved byte source");
    Ok(ExitCode::SUCCESS)
}

fn run_extend(p_true: f64, path: &Path) -> Result<ExitCode> {
    let dist = binary_extension(p_true)?;
    io::save_distribution(path, &dist)
        .with_context(|| format!("failed to write distribution to {}", path.display()))?;
    info!(p_true, entropy = dist.entropy(), path = %path.display(), "Saved extended source");
    Ok(ExitCode::SUCCESS)
}

fn run_measure(
    input: &Path,
    output: &Path,
    method: Option<Method>,
    export_p: Option<PathBuf>,
    export_s: Option<PathBuf>,
) -> Result<ExitCode> {
    let bytes = io::read_byte_source(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let start = Instant::now();
    let estimator = Entropy::new_discrete(bytes)
        .with_context(|| format!("cannot measure {}", input.display()))?;
    let h = estimator.global_value();
    let elapsed = start.elapsed();

    io::append_result(
        output,
        &EntropyRecord {
            input: input.display().to_string(),
            size: estimator.len(),
            entropy: h,
        },
    )
    .with_context(|| format!("failed to append result to {}", output.display()))?;

    debug!(
        file = %input.display(),
        size = estimator.len(),
        entropy = h,
        calc_time = ?elapsed,
        "Measured file (bits/byte)"
    );

    let dist = estimator.distribution();
    match method {
        Some(Method::P) => info!("Probability:\n{}", dist.probabilities()),
        Some(Method::S) => info!("Self Info:\n{}", dist.self_information()),
        None => {}
    }

    if let Some(path) = &export_p {
        io::save_distribution(path, dist)
            .with_context(|| format!("failed to export probabilities to {}", path.display()))?;
    }
    if let Some(path) = &export_s {
        io::save_indexed(path, &dist.self_information())
            .with_context(|| format!("failed to export self-information to {}", path.display()))?;
    }
    Ok(ExitCode::SUCCESS)
}

fn run_self_test() -> ExitCode {
    info!("Begin self test");
    let outcomes = selftest::run_all();
    let failed = outcomes.iter().filter(|o| !o.passed).count();
    info!(checks = outcomes.len(), failed, "Self test finished");
    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
