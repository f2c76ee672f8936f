// Custom error types for the parallel prime scan
// 並列スキャン専用のカスタムエラー型定義

use thiserror::Error;

/// 並列スキャン固有のエラー型
///
/// アルゴリズム本体（素数判定・分割・チャンネル送受信）は失敗しないため、
/// エラーは起動時バリデーションとタスク・シンク境界に限られる。
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("範囲エラー: start={start} > end={end}")]
    InvalidRange { start: i64, end: i64 },

    #[error("ワーカー数エラー: {worker_count} (1以上が必要です)")]
    InvalidWorkerCount { worker_count: usize },

    #[error("タスクエラー: {source}")]
    TaskError {
        #[source]
        source: tokio::task::JoinError,
    },

    #[error("出力エラー: {source}")]
    SinkError {
        #[source]
        source: anyhow::Error,
    },
}

impl ScanError {
    /// 範囲エラーの作成
    pub fn invalid_range(start: i64, end: i64) -> Self {
        Self::InvalidRange { start, end }
    }

    /// ワーカー数エラーの作成
    pub fn invalid_worker_count(worker_count: usize) -> Self {
        Self::InvalidWorkerCount { worker_count }
    }

    /// タスクエラーの作成
    pub fn task(source: tokio::task::JoinError) -> Self {
        Self::TaskError { source }
    }

    /// 出力エラーの作成
    pub fn sink(source: anyhow::Error) -> Self {
        Self::SinkError { source }
    }
}

impl From<tokio::task::JoinError> for ScanError {
    fn from(error: tokio::task::JoinError) -> Self {
        ScanError::TaskError { source: error }
    }
}

impl From<anyhow::Error> for ScanError {
    fn from(error: anyhow::Error) -> Self {
        ScanError::SinkError { source: error }
    }
}

/// 並列スキャンの結果型
pub type ScanResult<T> = std::result::Result<T, ScanError>;
