// Collector - 素数の収集と出力機能

use crate::core::error::ScanResult;
use crate::core::traits::PrimeSink;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Collector: チャンネルが閉じて空になるまで受信し、到着順にシンクへ渡す
///
/// 呼び出し元のタスク上で動く収集ループ。チャンネルが空のときは
/// クローズされるまで待機し、`recv`が`None`を返した時点（クローズ済み
/// かつドレイン済み）で受信件数を返して終了する。到着順は数値順とは
/// 無関係で、スケジューリング依存。
pub async fn collect_primes<S>(
    mut prime_rx: mpsc::Receiver<i64>,
    sink: Arc<S>,
) -> ScanResult<u64>
where
    S: PrimeSink,
{
    let mut received = 0u64;

    while let Some(prime) = prime_rx.recv().await {
        sink.record(prime).await?;
        received += 1;
    }

    Ok(received)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::output::MemoryPrimeSink;

    #[tokio::test]
    async fn test_collector_receives_until_channel_closed() {
        let (prime_tx, prime_rx) = mpsc::channel::<i64>(10);
        let sink = Arc::new(MemoryPrimeSink::new());

        for prime in [2, 3, 5, 7] {
            prime_tx.send(prime).await.unwrap();
        }
        drop(prime_tx); // チャンネル終了

        let received = collect_primes(prime_rx, sink.clone()).await.unwrap();

        assert_eq!(received, 4);
        assert_eq!(sink.collected(), vec![2, 3, 5, 7]);
    }

    #[tokio::test]
    async fn test_collector_empty_channel() {
        let (prime_tx, prime_rx) = mpsc::channel::<i64>(10);
        let sink = Arc::new(MemoryPrimeSink::new());
        drop(prime_tx);

        let received = collect_primes(prime_rx, sink.clone()).await.unwrap();

        assert_eq!(received, 0);
        assert!(sink.collected().is_empty());
    }

    #[tokio::test]
    async fn test_collector_propagates_sink_error() {
        use crate::core::traits::MockPrimeSink;

        let (prime_tx, prime_rx) = mpsc::channel::<i64>(10);
        prime_tx.send(13).await.unwrap();
        drop(prime_tx);

        let mut sink = MockPrimeSink::new();
        sink.expect_record()
            .times(1)
            .returning(|_| Err(anyhow::anyhow!("書き込み失敗")));

        let result = collect_primes(prime_rx, Arc::new(sink)).await;
        assert!(result.is_err());
    }
}
