// Closer - 全ワーカー完了の監視とチャンネルの一回限りのクローズ

use crate::core::error::ScanResult;
use crate::core::traits::ProgressReporter;
use crate::core::types::WorkerReport;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Closerタスク: 全ワーカーの完了シグナルを待ち、出力チャンネルを閉じる
///
/// 各ワーカーのJoinHandle解決が完了シグナル（そのワーカーの最後のsendの
/// 後に必ず起きる）。N個すべてを待ってから保持している送信側をドロップ
/// するため、クローズは一度だけ、必ず全ワーカーの最終sendより後に起き、
/// 進行中のsendと競合しない。収集ループとは独立のタスクとして動くため、
/// メインループがワーカー完了を直接待つことはない。
pub fn spawn_closer<R>(
    handles: Vec<JoinHandle<WorkerReport>>,
    prime_tx: mpsc::Sender<i64>,
    reporter: Arc<R>,
) -> JoinHandle<ScanResult<Vec<WorkerReport>>>
where
    R: ProgressReporter + 'static,
{
    tokio::spawn(async move {
        let mut reports = Vec::with_capacity(handles.len());

        for handle in handles {
            let report = handle.await?;
            reporter.report_worker_finished(&report).await;
            reports.push(report);
        }

        // 最後の送信側をドロップ → チャンネルのクローズ（一回限り・不可逆）
        drop(prime_tx);

        Ok(reports)
    })
}
