// Worker - サブ範囲の走査機能

use crate::core::types::{Range, WorkerReport};
use crate::primality::is_prime;
use tokio::sync::mpsc;

/// 単一ワーカー: サブ範囲を昇順に走査し、素数を出力チャンネルへ送信
///
/// チャンネルが満杯のときsendは待機する（遅い消費者への自然な
/// バックプレッシャー）。タスクの完了（JoinHandleの解決）がそのまま
/// 完了シグナルであり、最後のsendより後に必ず起きる。
pub fn spawn_worker(
    worker_id: usize,
    sub_range: Range,
    prime_tx: mpsc::Sender<i64>,
) -> tokio::task::JoinHandle<WorkerReport> {
    tokio::spawn(async move {
        let mut primes_found = 0u64;

        for n in sub_range.start..=sub_range.end {
            if is_prime(n) {
                if (prime_tx.send(n).await).is_err() {
                    // 受信側が閉じられた場合は正常終了
                    break;
                }
                primes_found += 1;
            }
        }

        // prime_txをドロップしてこのワーカーの送信側を手放す
        WorkerReport {
            worker_id,
            sub_range,
            values_scanned: sub_range.len(),
            primes_found,
        }
    })
}

/// ワーカープール: サブ範囲ごとに1ワーカーを起動
pub fn spawn_workers(
    sub_ranges: &[Range],
    prime_tx: &mpsc::Sender<i64>,
) -> Vec<tokio::task::JoinHandle<WorkerReport>> {
    sub_ranges
        .iter()
        .enumerate()
        .map(|(worker_id, &sub_range)| spawn_worker(worker_id, sub_range, prime_tx.clone()))
        .collect()
}
