// 進捗監視サービス

pub mod implementations;

pub use implementations::{ConsoleProgressReporter, NoOpProgressReporter};
