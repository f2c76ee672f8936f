// 設定管理の具象実装

use crate::core::error::{ScanError, ScanResult};
use crate::core::traits::ScanConfig;
use crate::core::types::{PartitionStrategy, Range};

/// デフォルト設定実装
///
/// `Default`は従来の固定定数（start=1, end=10000,
/// workers=10, バッファ=100）を再現する。
#[derive(Debug, Clone)]
pub struct DefaultScanConfig {
    range: Range,
    worker_count: usize,
    buffer_size: usize,
    strategy: PartitionStrategy,
}

impl DefaultScanConfig {
    pub fn new(range: Range) -> Self {
        Self {
            range,
            ..Self::default()
        }
    }

    /// CPU数に合わせたワーカー数の設定を作成
    pub fn for_cpu_count() -> Self {
        Self::default().with_worker_count(num_cpus::get().max(1))
    }

    pub fn with_range(mut self, start: i64, end: i64) -> Self {
        self.range = Range::new(start, end);
        self
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    pub fn with_partition_strategy(mut self, strategy: PartitionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// 起動時バリデーション - ワーカー起動前に同期的に検査する
    pub fn validate(&self) -> ScanResult<()> {
        if self.range.start > self.range.end {
            return Err(ScanError::invalid_range(self.range.start, self.range.end));
        }
        if self.worker_count == 0 {
            return Err(ScanError::invalid_worker_count(self.worker_count));
        }
        Ok(())
    }
}

impl Default for DefaultScanConfig {
    fn default() -> Self {
        Self {
            range: Range::new(1, 10_000),
            worker_count: 10,
            buffer_size: 100,
            strategy: PartitionStrategy::default(),
        }
    }
}

impl ScanConfig for DefaultScanConfig {
    fn range(&self) -> Range {
        self.range
    }

    fn worker_count(&self) -> usize {
        self.worker_count
    }

    fn channel_buffer_size(&self) -> usize {
        self.buffer_size
    }

    fn partition_strategy(&self) -> PartitionStrategy {
        self.strategy
    }
}
