// サービス層 - 機能別の具象実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod output;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::DefaultScanConfig;
pub use monitoring::{ConsoleProgressReporter, NoOpProgressReporter};
pub use output::{collect_primes, ConsolePrimeSink, JsonPrimeSink, MemoryPrimeSink};
