//! Runs one validated request: seed, generate, emit, report timings.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::config::{GenerationRequest, RecordSpec};
use crate::error::Result;
use crate::generator::{generate_floats, generate_integers, generate_strings, GeneratedPayload};

/// Where the payload goes.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Standard output, optionally preceded by a `Generated data:` line.
    Console { header: bool },
    /// Created or replaced once the whole payload is on disk.
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub output: Output,
    /// Digits after the decimal point for float records.
    pub precision: Option<usize>,
    pub timeit: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            output: Output::Console { header: false },
            precision: None,
            timeit: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Timings {
    /// Command-line parsing, measured by the caller.
    pub parse: Duration,
    /// Drawing and formatting the records.
    pub generation: Duration,
}

/// Seeds a fresh stream from `request.seed` and produces the whole payload.
///
/// Returns the payload together with the time spent generating it.
pub fn generate(
    request: &GenerationRequest,
    precision: Option<usize>,
) -> Result<(GeneratedPayload, Duration)> {
    let mut rng = SmallRng::seed_from_u64(request.seed);

    let start = Instant::now();
    let payload = match &request.records {
        RecordSpec::Str { length, charset } => GeneratedPayload::from_strings(generate_strings(
            &mut rng,
            request.count,
            charset,
            *length,
        )?),
        RecordSpec::Int => {
            GeneratedPayload::from_integers(&generate_integers(&mut rng, request.count))
        }
        RecordSpec::Float(distribution) => GeneratedPayload::from_floats(
            &generate_floats(&mut rng, request.count, distribution)?,
            precision,
        ),
    };
    let elapsed = start.elapsed();

    tracing::debug!(records = payload.len(), ?elapsed, "generation finished");
    Ok((payload, elapsed))
}

/// Generates the payload for `request`, writes it to the configured output and,
/// if asked, prints the timing report to standard output afterwards.
///
/// Nothing is written when generation fails.
pub fn run(request: &GenerationRequest, options: &RunOptions, parse: Duration) -> Result<Timings> {
    tracing::info!(
        kind = %request.records.kind(),
        count = request.count,
        seed = request.seed,
        "generating records"
    );

    let (payload, generation) = generate(request, options.precision)?;
    let rendered = payload.render();

    match &options.output {
        Output::File(path) => {
            write_file(path, &rendered)?;
            tracing::debug!(path = %path.display(), bytes = rendered.len(), "payload written");
        }
        Output::Console { header } => {
            let so = std::io::stdout();
            let so = so.lock();
            let mut so = BufWriter::with_capacity(32768, so);
            write_payload(&mut so, &rendered, *header)?;
            so.flush()?;
            tracing::debug!(bytes = rendered.len(), "payload written to stdout");
        }
    }

    let timings = Timings { parse, generation };
    if options.timeit {
        let so = std::io::stdout();
        let mut so = so.lock();
        write_timings(&mut so, &timings)?;
    }
    Ok(timings)
}

/// Writes into a temporary file next to `path` and renames it over `path`, so
/// a failed write never leaves a truncated target behind.
fn write_file(path: &Path, rendered: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    {
        let mut f = BufWriter::new(tmp.as_file_mut());
        f.write_all(rendered.as_bytes())?;
        f.flush()?;
    }
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn write_payload<W: Write>(w: &mut W, rendered: &str, header: bool) -> Result<()> {
    if header {
        writeln!(w, "Generated data:")?;
    }
    w.write_all(rendered.as_bytes())?;
    Ok(())
}

pub fn write_timings<W: Write>(w: &mut W, timings: &Timings) -> Result<()> {
    writeln!(w, "Data parse time: {} seconds", timings.parse.as_secs_f64())?;
    writeln!(
        w,
        "Algorithm execution time: {} seconds",
        timings.generation.as_secs_f64()
    )?;
    Ok(())
}
