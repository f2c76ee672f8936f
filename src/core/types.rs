// スキャンに関連するデータ型定義

use serde::{Deserialize, Serialize};

/// 両端を含む整数範囲
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start: i64,
    pub end: i64,
}

impl Range {
    pub const fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// 範囲に含まれる値の個数（空範囲は0）
    pub fn len(&self) -> u64 {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start + 1) as u64
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    pub fn contains(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }
}

/// 範囲分割の戦略
///
/// `Legacy`は旧来の固定分割の境界バグをそのまま再現する：範囲長がワーカー数で
/// 割り切れない場合、末尾の余り分はどのワーカーにも割り当てられない。
/// `FullCoverage`（デフォルト）は最後のワーカーが範囲の終端まで担当する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartitionStrategy {
    Legacy,
    #[default]
    FullCoverage,
}

/// ワーカー単位の実行結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerReport {
    pub worker_id: usize,
    pub sub_range: Range,
    pub values_scanned: u64,
    pub primes_found: u64,
}

/// スキャン全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub range: Range,
    pub worker_count: usize,
    pub values_scanned: u64,
    pub primes_found: u64,
    pub total_scan_time_ms: u64,
    pub worker_reports: Vec<WorkerReport>,
}
