// 並列スキャンシステムのトレイト定義
// 全ての抽象化インターフェースを定義

use super::types::{PartitionStrategy, Range, ScanSummary, WorkerReport};
use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

/// 並列スキャンの設定を抽象化するトレイト
#[automock]
pub trait ScanConfig: Send + Sync {
    /// スキャン対象の範囲を取得
    fn range(&self) -> crate::core::types::Range;

    /// ワーカー数を取得
    fn worker_count(&self) -> usize;

    /// チャンネルバッファサイズを取得
    fn channel_buffer_size(&self) -> usize;

    /// 範囲分割の戦略を取得
    fn partition_strategy(&self) -> PartitionStrategy;
}

// ScanConfig for Box<dyn ScanConfig>
impl ScanConfig for Box<dyn ScanConfig> {
    fn range(&self) -> Range {
        self.as_ref().range()
    }

    fn worker_count(&self) -> usize {
        self.as_ref().worker_count()
    }

    fn channel_buffer_size(&self) -> usize {
        self.as_ref().channel_buffer_size()
    }

    fn partition_strategy(&self) -> PartitionStrategy {
        self.as_ref().partition_strategy()
    }
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait ProgressReporter: Send + Sync {
    /// スキャン開始時の報告
    async fn report_started(&self, range: crate::core::types::Range, worker_count: usize);

    /// ワーカー完了時の報告
    async fn report_worker_finished(&self, report: &WorkerReport);

    /// スキャン完了時の報告
    async fn report_completed(&self, summary: &ScanSummary);
}

// ProgressReporter for Box<dyn ProgressReporter>
#[async_trait]
impl ProgressReporter for Box<dyn ProgressReporter> {
    async fn report_started(&self, range: Range, worker_count: usize) {
        self.as_ref().report_started(range, worker_count).await
    }

    async fn report_worker_finished(&self, report: &WorkerReport) {
        self.as_ref().report_worker_finished(report).await
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        self.as_ref().report_completed(summary).await
    }
}

/// 発見した素数の出力先を抽象化するトレイト
#[automock]
#[async_trait]
pub trait PrimeSink: Send + Sync {
    /// 単一素数の記録
    async fn record(&self, prime: i64) -> Result<()>;

    /// 出力の完了処理
    async fn finalize(&self, summary: &ScanSummary) -> Result<()>;
}

// PrimeSink for Box<dyn PrimeSink>
#[async_trait]
impl PrimeSink for Box<dyn PrimeSink> {
    async fn record(&self, prime: i64) -> Result<()> {
        self.as_ref().record(prime).await
    }

    async fn finalize(&self, summary: &ScanSummary) -> Result<()> {
        self.as_ref().finalize(summary).await
    }
}
