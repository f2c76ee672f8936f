// Pipeline - 並列素数スキャンのオーケストレーション
// INIT -> PARTITIONED -> WORKERS_RUNNING -> (COLLECTING || WAITING) -> CLOSED -> DRAINED -> DONE

use super::{closer::spawn_closer, worker::spawn_workers};
use crate::core::{
    error::{ScanError, ScanResult},
    traits::{PrimeSink, ProgressReporter, ScanConfig},
    types::ScanSummary,
};
use crate::partition::partition;
use crate::services::output::collect_primes;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// 責任が明確に分離されたスキャンパイプライン
///
/// ワーカープールとCloserタスクを起動し、呼び出し元のタスク上で
/// チャンネルをドレインする。収集ループがブロックするのはチャンネル
/// に対してだけで、ワーカー完了を直接待つことはない。
#[derive(Debug, Default, Clone)]
pub struct ScanPipeline;

impl ScanPipeline {
    /// 新しいパイプラインを作成
    pub fn new() -> Self {
        Self
    }

    /// 設定された範囲をスキャンし、発見した素数をシンクへ流す
    pub async fn execute<C, R, S>(
        &self,
        config: &C,
        reporter: Arc<R>,
        sink: Arc<S>,
    ) -> ScanResult<ScanSummary>
    where
        C: ScanConfig,
        R: ProgressReporter + 'static,
        S: PrimeSink + 'static,
    {
        let start_time = Instant::now();
        let range = config.range();
        let worker_count = config.worker_count();

        // 起動時バリデーション - ワーカーを起動する前に同期的に失敗させる
        if range.start > range.end {
            return Err(ScanError::invalid_range(range.start, range.end));
        }
        if worker_count == 0 {
            return Err(ScanError::invalid_worker_count(worker_count));
        }

        // 範囲の静的分割（起動時に一度だけ）
        let sub_ranges = partition(range, worker_count, config.partition_strategy());

        reporter.report_started(range, worker_count).await;

        // 有界の出力チャンネル（tokio mpscは容量0を許さない）
        let (prime_tx, prime_rx) = mpsc::channel::<i64>(config.channel_buffer_size().max(1));

        // ワーカープール起動
        let handles = spawn_workers(&sub_ranges, &prime_tx);

        // Closerタスク起動 - 残った送信側を引き渡す
        let closer_handle = spawn_closer(handles, prime_tx, Arc::clone(&reporter));

        // 収集ループ（このタスク上でドレイン）
        let primes_found = collect_primes(prime_rx, Arc::clone(&sink)).await?;

        // Closer完了を待機してワーカーレポートを回収
        let worker_reports = closer_handle.await??;

        let values_scanned = worker_reports.iter().map(|r| r.values_scanned).sum();
        let summary = ScanSummary {
            range,
            worker_count,
            values_scanned,
            primes_found,
            total_scan_time_ms: start_time.elapsed().as_millis() as u64,
            worker_reports,
        };

        reporter.report_completed(&summary).await;

        // 出力の完了処理
        sink.finalize(&summary).await.map_err(ScanError::sink)?;

        Ok(summary)
    }
}
