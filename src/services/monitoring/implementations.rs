// 進捗監視の具象実装

use crate::core::traits::ProgressReporter;
use crate::core::types::{Range, ScanSummary, WorkerReport};
use async_trait::async_trait;

/// コンソール出力による進捗報告実装
///
/// 標準出力は素数ストリーム専用のため、報告はすべて標準エラーへ書く。
#[derive(Debug, Default, Clone)]
pub struct ConsoleProgressReporter {
    quiet: bool,
}

impl ConsoleProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }
}

#[async_trait]
impl ProgressReporter for ConsoleProgressReporter {
    async fn report_started(&self, range: Range, worker_count: usize) {
        if !self.quiet {
            eprintln!(
                "🚀 Scanning [{}, {}] with {worker_count} workers...",
                range.start, range.end
            );
        }
    }

    async fn report_worker_finished(&self, report: &WorkerReport) {
        if !self.quiet {
            eprintln!(
                "📊 Worker {} finished: [{}, {}] scanned={} primes={}",
                report.worker_id,
                report.sub_range.start,
                report.sub_range.end,
                report.values_scanned,
                report.primes_found
            );
        }
    }

    async fn report_completed(&self, summary: &ScanSummary) {
        if !self.quiet {
            eprintln!(
                "✅ Completed! Scanned: {}, Primes: {} ({}ms)",
                summary.values_scanned, summary.primes_found, summary.total_scan_time_ms
            );
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpProgressReporter;

impl NoOpProgressReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProgressReporter for NoOpProgressReporter {
    async fn report_started(&self, _range: Range, _worker_count: usize) {
        // 何もしない
    }

    async fn report_worker_finished(&self, _report: &WorkerReport) {
        // 何もしない
    }

    async fn report_completed(&self, _summary: &ScanSummary) {
        // 何もしない
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_summary() -> ScanSummary {
        ScanSummary {
            range: Range::new(1, 100),
            worker_count: 4,
            values_scanned: 100,
            primes_found: 25,
            total_scan_time_ms: 3,
            worker_reports: vec![],
        }
    }

    #[tokio::test]
    async fn test_console_progress_reporter() {
        // 出力キャプチャは複雑なため、基本的な呼び出しテストのみ
        let reporter = ConsoleProgressReporter::quiet(); // quiet modeでテスト

        reporter.report_started(Range::new(1, 100), 4).await;
        reporter
            .report_worker_finished(&WorkerReport {
                worker_id: 0,
                sub_range: Range::new(1, 25),
                values_scanned: 25,
                primes_found: 9,
            })
            .await;
        reporter.report_completed(&dummy_summary()).await;

        // 基本的な呼び出しが成功することを確認
    }

    #[tokio::test]
    async fn test_console_progress_reporter_creation() {
        let reporter1 = ConsoleProgressReporter::new();
        let reporter2 = ConsoleProgressReporter::quiet();

        assert!(!reporter1.quiet);
        assert!(reporter2.quiet);
    }

    #[tokio::test]
    async fn test_noop_progress_reporter() {
        let reporter = NoOpProgressReporter::new();

        // 全てのメソッドを呼び出してもパニックしない
        reporter.report_started(Range::new(1, 100), 4).await;
        reporter.report_completed(&dummy_summary()).await;
    }
}
