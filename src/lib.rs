pub mod core;
pub mod engine;
pub mod partition;
pub mod primality;
pub mod services;

use crate::core::{PrimeSink, ProgressReporter, ScanConfig, ScanResult, ScanSummary};
use engine::ScanPipeline;
use services::{MemoryPrimeSink, NoOpProgressReporter};
use std::sync::Arc;

pub use crate::core::{PartitionStrategy, Range, ScanError, WorkerReport};
pub use primality::is_prime;
pub use services::DefaultScanConfig;

/// 指定された設定でスキャンを実行する（高レベル便利関数）
pub async fn scan<C, R, S>(
    config: &C,
    reporter: Arc<R>,
    sink: Arc<S>,
) -> ScanResult<ScanSummary>
where
    C: ScanConfig,
    R: ProgressReporter + 'static,
    S: PrimeSink + 'static,
{
    ScanPipeline::new().execute(config, reporter, sink).await
}

/// スキャンを実行し、発見した素数を到着順のVecで返す（テスト・組み込み用）
pub async fn scan_to_vec<C>(config: &C) -> ScanResult<Vec<i64>>
where
    C: ScanConfig,
{
    let sink = Arc::new(MemoryPrimeSink::new());
    scan(config, Arc::new(NoOpProgressReporter::new()), sink.clone()).await?;
    Ok(sink.collected())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scan_to_vec_small_range() {
        let config = DefaultScanConfig::default()
            .with_range(1, 30)
            .with_worker_count(3);

        let mut primes = scan_to_vec(&config).await.unwrap();
        primes.sort_unstable();

        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[tokio::test]
    async fn test_scan_returns_summary() {
        let config = DefaultScanConfig::default()
            .with_range(1, 100)
            .with_worker_count(4);
        let sink = Arc::new(MemoryPrimeSink::new());

        let summary = scan(&config, Arc::new(NoOpProgressReporter::new()), sink)
            .await
            .unwrap();

        assert_eq!(summary.primes_found, 25);
        assert_eq!(summary.worker_count, 4);
    }

    #[tokio::test]
    async fn test_scan_to_vec_propagates_validation_error() {
        let config = DefaultScanConfig::default().with_range(5, 4);
        assert!(scan_to_vec(&config).await.is_err());
    }
}
