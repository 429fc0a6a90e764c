use std::path::PathBuf;
use std::time::{Duration, Instant};

use random_dataset_cli::config::{DEFAULT_CHARSET, DEFAULT_LENGTH};
use random_dataset_cli::{
    driver, validate, DistributionKind, Output, RawParams, RecordKind, RunOptions,
};

/// Generate some random strings, integers or floats, one per line
#[derive(argh::FromArgs)]
struct Opts {
    /// number of strings or numbers to generate
    #[argh(positional)]
    data_num: usize,

    /// initial seed value (default: 0)
    #[argh(option, default = "0", short = 's')]
    seed: i64,

    /// data type: int, float or str (default: int)
    #[argh(option, long = "type", default = "RecordKind::Int", short = 't')]
    kind: RecordKind,

    /// print execution time
    #[argh(switch)]
    timeit: bool,

    /// float distribution: uniform or normal
    #[argh(option, short = 'd')]
    distribution: Option<DistributionKind>,

    /// normal distribution mean (any value)
    #[argh(option)]
    mean: Option<f64>,

    /// normal distribution standard deviation (greater than zero)
    #[argh(option, long = "std")]
    std_dev: Option<f64>,

    /// uniform distribution min value (less than or equal to max value)
    #[argh(option)]
    min_value: Option<f64>,

    /// uniform distribution max value (greater than or equal to min value)
    #[argh(option)]
    max_value: Option<f64>,

    /// length of the strings (default: 100)
    #[argh(option, default = "DEFAULT_LENGTH", short = 'l')]
    length: usize,

    /// acceptable character set (default: all letters, digits and punctuation marks)
    #[argh(option, default = "DEFAULT_CHARSET.to_string()", short = 'c')]
    charset: String,

    /// output file name (default: output to console)
    #[argh(option, short = 'f')]
    filename: Option<PathBuf>,

    /// number of digits after decimal to print for floats
    #[argh(option, short = 'p')]
    precision: Option<usize>,

    /// print a "Generated data:" line before console output
    #[argh(switch)]
    header: bool,
}

impl Opts {
    fn params(&self) -> RawParams {
        RawParams {
            count: self.data_num,
            seed: self.seed,
            kind: self.kind,
            distribution: self.distribution,
            mean: self.mean,
            std: self.std_dev,
            min_value: self.min_value,
            max_value: self.max_value,
            length: self.length,
            charset: self.charset.clone(),
        }
    }

    fn run_options(&self) -> RunOptions {
        let output = match &self.filename {
            Some(path) if !path.as_os_str().is_empty() => Output::File(path.clone()),
            _ => Output::Console { header: self.header },
        };
        RunOptions {
            output,
            precision: self.precision,
            timeit: self.timeit,
        }
    }
}

/// Maps the underscore spellings of the uniform bounds onto argh's kebab-case names.
fn normalize_flag(arg: &str) -> &str {
    match arg {
        "--min_value" => "--min-value",
        "--max_value" => "--max-value",
        other => other,
    }
}

/// `argh::from_env` with [`normalize_flag`] applied to every argument.
fn parse_opts() -> Opts {
    let strings: Vec<String> = std::env::args().collect();
    let cmd = strings.first().map(String::as_str).unwrap_or("random-dataset-cli");
    let args: Vec<&str> = strings.iter().skip(1).map(|s| normalize_flag(s)).collect();

    match <Opts as argh::FromArgs>::from_args(&[cmd], &args) {
        Ok(opts) => opts,
        Err(early_exit) => std::process::exit(match early_exit.status {
            Ok(()) => {
                println!("{}", early_exit.output);
                0
            }
            Err(()) => {
                eprintln!("{}\nRun {} --help for more information.", early_exit.output, cmd);
                1
            }
        }),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let start = Instant::now();
    let opts = parse_opts();
    let parse = start.elapsed();

    run(&opts, parse)?;
    Ok(())
}

fn run(opts: &Opts, parse: Duration) -> random_dataset_cli::Result<()> {
    let request = validate(opts.params())?;
    driver::run(&request, &opts.run_options(), parse)?;
    Ok(())
}
