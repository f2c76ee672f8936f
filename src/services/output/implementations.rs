// 素数出力の具象実装

use crate::core::traits::PrimeSink;
use crate::core::types::ScanSummary;
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio::io::AsyncWriteExt;

/// 標準出力へ1行1素数で出力するシンク
///
/// 進捗報告は標準エラー側に分離されているため、標準出力には素数の
/// ストリームだけが流れる。
#[derive(Debug, Default, Clone)]
pub struct ConsolePrimeSink;

impl ConsolePrimeSink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PrimeSink for ConsolePrimeSink {
    async fn record(&self, prime: i64) -> Result<()> {
        println!("{prime}");
        Ok(())
    }

    async fn finalize(&self, _summary: &ScanSummary) -> Result<()> {
        Ok(())
    }
}

/// メモリ内保存のシンク実装（テスト用および開発用）
#[derive(Debug, Clone)]
pub struct MemoryPrimeSink {
    primes: Arc<Mutex<Vec<i64>>>,
    finalized: Arc<Mutex<bool>>,
}

impl Default for MemoryPrimeSink {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPrimeSink {
    pub fn new() -> Self {
        Self {
            primes: Arc::new(Mutex::new(Vec::new())),
            finalized: Arc::new(Mutex::new(false)),
        }
    }

    /// テスト用：収集された素数を到着順で取得
    pub fn collected(&self) -> Vec<i64> {
        self.primes.lock().unwrap().clone()
    }

    /// テスト用：収集件数を取得
    pub fn count(&self) -> usize {
        self.primes.lock().unwrap().len()
    }

    /// テスト用：完了状態を確認
    pub fn is_finalized(&self) -> bool {
        *self.finalized.lock().unwrap()
    }

    /// テスト用：データクリア
    pub fn clear(&self) {
        self.primes.lock().unwrap().clear();
        *self.finalized.lock().unwrap() = false;
    }
}

#[async_trait]
impl PrimeSink for MemoryPrimeSink {
    async fn record(&self, prime: i64) -> Result<()> {
        self.primes.lock().unwrap().push(prime);
        Ok(())
    }

    async fn finalize(&self, _summary: &ScanSummary) -> Result<()> {
        *self.finalized.lock().unwrap() = true;
        Ok(())
    }
}

/// JSON形式で保存するスキャン結果（ファイル単位）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanDocument {
    pub summary: ScanSummary,
    pub primes: Vec<i64>,
}

/// JSONファイルへ書き出すシンク実装
///
/// 素数をメモリにバッファし、`finalize`でサマリーと合わせて一括で
/// 書き出す。
#[derive(Debug, Clone)]
pub struct JsonPrimeSink {
    output_path: PathBuf,
    primes: Arc<Mutex<Vec<i64>>>,
}

impl JsonPrimeSink {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
            primes: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PrimeSink for JsonPrimeSink {
    async fn record(&self, prime: i64) -> Result<()> {
        self.primes.lock().unwrap().push(prime);
        Ok(())
    }

    async fn finalize(&self, summary: &ScanSummary) -> Result<()> {
        let document = ScanDocument {
            summary: summary.clone(),
            primes: self.primes.lock().unwrap().clone(),
        };

        let json = serde_json::to_string_pretty(&document)?;
        let mut file = tokio::fs::File::create(&self.output_path).await?;
        file.write_all(json.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }
}
