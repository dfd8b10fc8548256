//! Command-line front end for the cry analyzer
//!
//! Usage:
//!   bawl [--json] [--jobs N] [--fed-hours H] [--diaper STATE] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files (batch-level). Each file analysis is still
//!   single-threaded.
//! - Default workers: (available CPU threads - 1), keeping one core free for
//!   the system.

use std::env;
use std::process;

use rayon::prelude::*;
use serde::Serialize;

use bawl_dsp::{advise, analyze_cry, decode_file, Advice, AnalysisConfig, CareContext, CryAnalysis};

/// Per-file outcome for reporting
#[derive(Serialize)]
#[serde(untagged)]
enum FileOutcome {
    Analyzed {
        file: String,
        analysis: CryAnalysis,
        advice: Advice,
    },
    Failed {
        file: String,
        error: String,
        hint: &'static str,
    },
}

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism()
        .map(|v| v.get())
        .unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn print_usage() {
    eprintln!(
        "Usage: bawl [--json] [--jobs N] [--fed-hours H] [--diaper STATE] <file1> <file2> ...\n\
         \n\
         --json          Emit one JSON object per line (JSONL)\n\
         --jobs N        Parallel workers (default: CPU-1)\n\
         --fed-hours H   Hours since the last feed (default: 2.5)\n\
         --diaper STATE  Diaper state: clean, soiled, dirty, or wet (default: clean)\n"
    );
}

fn analyze_file(path: &str, config: &AnalysisConfig, context: &CareContext) -> FileOutcome {
    let result = decode_file(std::path::Path::new(path))
        .and_then(|clip| analyze_cry(&clip.samples, clip.sample_rate, config.clone()));

    match result {
        Ok(analysis) => {
            let advice = advise(analysis.cause, context);
            FileOutcome::Analyzed {
                file: path.to_string(),
                analysis,
                advice,
            }
        }
        Err(e) => FileOutcome::Failed {
            file: path.to_string(),
            error: format!("analysis failed: {}", e),
            hint: e.remediation(),
        },
    }
}

fn print_text_report(outcomes: &[FileOutcome]) {
    for (idx, outcome) in outcomes.iter().enumerate() {
        match outcome {
            FileOutcome::Analyzed {
                file,
                analysis,
                advice,
            } => {
                let tempo = analysis
                    .features
                    .tempo_bpm()
                    .map(|bpm| format!("{:.0} BPM", bpm))
                    .unwrap_or_else(|| "no steady rhythm".to_string());

                println!("[{}/{}] {}", idx + 1, outcomes.len(), file);
                println!(
                    "  RMS {:.3}  Centroid {:.0} Hz  Tempo {}",
                    analysis.features.rms_mean,
                    analysis.features.spectral_centroid_hz,
                    tempo
                );
                println!(
                    "  Cause: {} (urgency: {})",
                    analysis.cause.label(),
                    analysis.urgency.color()
                );
                for warning in &analysis.metadata.warnings {
                    println!("  Warning: {}", warning);
                }
                println!();
                for line in advice.to_markdown().lines() {
                    println!("  {}", line);
                }
                println!();
            }
            FileOutcome::Failed { file, error, hint } => {
                println!("[{}/{}] {}: ERROR: {}", idx + 1, outcomes.len(), file, error);
                println!("  Hint: {}", hint);
                println!();
            }
        }
    }
}

fn main() {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut context = CareContext::default();
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or_else(|| {
                        eprintln!("ERROR: --jobs requires a positive integer");
                        process::exit(2);
                    });
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--fed-hours" => {
                let v = args
                    .first()
                    .and_then(|v| v.parse::<f32>().ok())
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .unwrap_or_else(|| {
                        eprintln!("ERROR: --fed-hours requires a non-negative number");
                        process::exit(2);
                    });
                args.remove(0);
                context.hours_since_feed = v;
            }
            "--diaper" => {
                let v = args
                    .first()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or_else(|| {
                        eprintln!("ERROR: --diaper requires clean, soiled, dirty, or wet");
                        process::exit(2);
                    });
                args.remove(0);
                context.diaper = v;
            }
            "--help" | "-h" => {
                print_usage();
                return;
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one audio file path. Use --help for usage.");
        process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    log::debug!("Batch: {} files, jobs={}", paths.len(), jobs);

    let config = AnalysisConfig::default();

    let pool = match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("ERROR: failed to build worker pool: {}", e);
            process::exit(1);
        }
    };

    let outcomes: Vec<FileOutcome> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| analyze_file(path, &config, &context))
            .collect()
    });

    if json {
        for outcome in &outcomes {
            match serde_json::to_string(outcome) {
                Ok(line) => println!("{}", line),
                Err(e) => eprintln!("ERROR: failed to serialize report: {}", e),
            }
        }
    } else {
        print_text_report(&outcomes);
    }

    let failed = outcomes
        .iter()
        .filter(|o| matches!(o, FileOutcome::Failed { .. }))
        .count();
    if failed > 0 {
        eprintln!("Done with errors: {}/{} files failed", failed, outcomes.len());
        process::exit(1);
    }
}
