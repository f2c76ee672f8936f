use anyhow::Result;
use clap::Parser;
use prime_scan::{
    core::{PrimeSink, ProgressReporter},
    engine::ScanPipeline,
    services::{ConsolePrimeSink, ConsoleProgressReporter, DefaultScanConfig, JsonPrimeSink,
        NoOpProgressReporter},
    PartitionStrategy,
};
use std::path::PathBuf;
use std::sync::Arc;

/// 範囲を固定分割して並列に素数を探索するツール
#[derive(Parser)]
#[command(name = "prime_scan")]
#[command(about = "Scan an integer range for primes with a fixed worker pool")]
#[command(version)]
struct Cli {
    /// Start of the inclusive scan range
    #[arg(long, default_value = "1")]
    start: i64,

    /// End of the inclusive scan range
    #[arg(long, default_value = "10000")]
    end: i64,

    /// Number of worker tasks
    #[arg(short, long, default_value = "10")]
    workers: usize,

    /// Capacity of the bounded output channel
    #[arg(short, long, default_value = "100")]
    buffer: usize,

    /// Reproduce the legacy partitioning (may silently skip the tail of the range)
    #[arg(long)]
    legacy_partition: bool,

    /// Write results as JSON to this file instead of printing primes to stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suppress progress reporting on stderr
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 設定構築 - デフォルトは従来の固定定数（1..10000、10ワーカー、バッファ100）
    let strategy = if cli.legacy_partition {
        PartitionStrategy::Legacy
    } else {
        PartitionStrategy::FullCoverage
    };
    let config = DefaultScanConfig::default()
        .with_range(cli.start, cli.end)
        .with_worker_count(cli.workers)
        .with_buffer_size(cli.buffer)
        .with_partition_strategy(strategy);

    // 2. 報告先とシンクの選択
    let reporter: Box<dyn ProgressReporter> = if cli.quiet {
        Box::new(NoOpProgressReporter::new())
    } else {
        Box::new(ConsoleProgressReporter::new())
    };

    let sink: Box<dyn PrimeSink> = match &cli.output {
        Some(path) => Box::new(JsonPrimeSink::new(path)),
        None => Box::new(ConsolePrimeSink::new()),
    };

    // 3. スキャン実行
    let pipeline = ScanPipeline::new();
    match pipeline
        .execute(&config, Arc::new(reporter), Arc::new(sink))
        .await
    {
        Ok(summary) => {
            if let Some(path) = &cli.output {
                eprintln!("📄 結果は {} に保存されました", path.display());
            }
            if !cli.quiet {
                eprintln!(
                    "📊 {}個の値を走査し、{}個の素数を発見 ({}ms)",
                    summary.values_scanned, summary.primes_found, summary.total_scan_time_ms
                );
            }
        }
        Err(error) => {
            eprintln!("❌ エラー: {error}");
            std::process::exit(1);
        }
    }

    Ok(())
}
