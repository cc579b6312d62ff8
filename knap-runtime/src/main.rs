use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, ArgMatches, Command};
use knap_challenges::knapsack::{Challenge, Solution};
use knap_runtime::driver::{plan, run_benchmark, timed_run};
use knap_structs::{
    config::{BenchmarkConfig, LimitsConfig},
    core::{BenchmarkSettings, Outcome, OutputData},
};
use knap_utils::{compress_obj, jsonify, load_json_arg};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::PathBuf,
};

fn cli() -> Command {
    Command::new("knap-runtime")
        .about("Solves, verifies and benchmarks 0/1 knapsack instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("compute_solution")
                .about("Generates an instance and solves it")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output data will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the output data will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify_solution")
                .about("Verifies a solution against the generated instance")
                .arg(
                    arg!(<SETTINGS> "Settings json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(<SOLUTION> "Solution json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
        .subcommand(
            Command::new("benchmark")
                .about("Runs every suite over its sizes and capacities and prints a report")
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file (default suites if unset)")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the report is written to this file instead of stdout")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--records [RECORDS_FILE] "If set, every run is also saved to this file as json")
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        )
}

fn init_logger() {
    let env = env_logger::Env::new()
        .filter_or("KNAP_LOG", "warn")
        .write_style("KNAP_LOG_STYLE");
    env_logger::init_from_env(env);
}

fn main() {
    init_logger();
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("compute_solution", sub_m)) => compute_solution(
            required::<String>(sub_m, "SETTINGS")?,
            required::<String>(sub_m, "RAND_HASH")?,
            required::<u64>(sub_m, "NONCE")?,
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("compress"),
        ),
        Some(("verify_solution", sub_m)) => verify_solution(
            required::<String>(sub_m, "SETTINGS")?,
            required::<String>(sub_m, "RAND_HASH")?,
            required::<u64>(sub_m, "NONCE")?,
            required::<String>(sub_m, "SOLUTION")?,
        ),
        Some(("benchmark", sub_m)) => benchmark(
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_one::<PathBuf>("records").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    }
}

fn required<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Result<T> {
    matches
        .get_one::<T>(id)
        .cloned()
        .ok_or_else(|| anyhow!("Missing argument {}", id))
}

fn generate(settings: &BenchmarkSettings, rand_hash: &str, nonce: u64) -> Result<Challenge> {
    let seed = settings.calc_seed(rand_hash, nonce)?;
    Challenge::generate_instance(&seed, &settings.difficulty)
}

pub fn compute_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let settings: BenchmarkSettings = load_json_arg(&settings)?;
    let challenge = generate(&settings, &rand_hash, nonce)?;
    log::info!(
        "solving {} items, capacity {} with {}",
        challenge.num_items(),
        challenge.capacity(),
        settings.algorithm_id
    );

    let plan = plan(
        &settings.algorithm_id,
        challenge.num_items(),
        challenge.capacity(),
        &LimitsConfig::default(),
    )?;
    let (outcome, elapsed_ms) = timed_run(plan, &challenge, 1)?;
    if let Outcome::Solved { solution } = &outcome {
        challenge.verify_solution(solution)?;
    }

    let output_data = OutputData {
        nonce,
        algorithm_id: settings.algorithm_id,
        elapsed_ms,
        outcome,
    };
    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&output_data)?)?;
        } else {
            fs::write(&path, jsonify(&output_data)?)?;
        }
        println!("output_data written to: {:?}", path);
    } else {
        println!("{}", jsonify(&output_data)?);
    }
    if let Outcome::Skipped { reason } = &output_data.outcome {
        eprintln!("No solution computed: {}", reason);
        std::process::exit(85);
    }
    Ok(())
}

pub fn verify_solution(
    settings: String,
    rand_hash: String,
    nonce: u64,
    solution: String,
) -> Result<()> {
    let settings: BenchmarkSettings = load_json_arg(&settings)?;
    let solution: Solution = load_json_arg(&solution)?;
    let challenge = generate(&settings, &rand_hash, nonce)?;
    challenge
        .verify_solution(&solution)
        .map_err(|e| anyhow!("Invalid solution: {}", e))?;
    println!("Solution is valid");
    Ok(())
}

pub fn benchmark(
    config: Option<String>,
    output_file: Option<PathBuf>,
    records_file: Option<PathBuf>,
) -> Result<()> {
    let config = match config {
        Some(config) => load_json_arg::<BenchmarkConfig>(&config)?,
        None => BenchmarkConfig::default(),
    };
    let mut out: Box<dyn Write> = match &output_file {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };
    let records = run_benchmark(&config, &mut out)?;
    if let Some(path) = output_file {
        eprintln!("report written to: {:?}", path);
    }
    if let Some(path) = records_file {
        fs::write(&path, jsonify(&records)?)?;
        eprintln!("{} records written to: {:?}", records.len(), path);
    }
    Ok(())
}
