// 出力サービス - 素数の収集とシンク実装

pub mod collector;
pub mod implementations;

pub use collector::collect_primes;
pub use implementations::{ConsolePrimeSink, JsonPrimeSink, MemoryPrimeSink, ScanDocument};
