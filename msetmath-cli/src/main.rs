use std::path::PathBuf;

use clap::Parser;
use msetmath::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Total number of top results across all workers
    #[arg(short = 'n', long, default_value_t = 20)]
    results: u64,

    /// Number of workers the query is distributed over
    #[arg(short = 'm', long, default_value_t = 4)]
    workers: usize,

    /// Stop once this many results per worker has been reported
    #[arg(short, long, default_value = None)]
    threshold: Option<u64>,

    /// Digits after the decimal point in printed probabilities
    #[arg(long, default_value_t = 4)]
    digits: usize,

    /// Output file path for the JSON records
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .format_timestamp_secs()
        .filter_level(log::LevelFilter::Info)
        .init();

    if args.workers == 0 {
        anyhow::bail!("at least one worker is required");
    }

    let (n, m) = (args.results, args.workers);
    log::info!(
        "Computing miss probabilities for the top {n} results over {m} workers ({} multisets)",
        num_uniq_msets(n, m)
    );

    let start = chrono::Utc::now();
    let mut cache = FactorialCache::up_to(n);
    let count_width = n.to_string().len();
    let mut records = Vec::new();
    for stats in compute_probabilities(&mut cache, n, m, args.threshold) {
        let mut line = String::new();
        if stats.pretty_print(&mut line, count_width, args.digits).is_ok() {
            println!("{line}");
        }
        records.push(stats);
    }
    let elapsed = chrono::Utc::now() - start;
    log::info!(
        "{} records computed in {} ms",
        records.len(),
        elapsed.num_milliseconds()
    );

    if let Some(path) = &args.output {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &records)?;
        log::info!("Records written to {}", path.display());
    }

    Ok(())
}
