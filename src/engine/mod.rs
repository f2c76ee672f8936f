// エンジン層 - ワーカープール、Closer、パイプライン

pub mod closer;
pub mod pipeline;
pub mod worker;

pub use closer::spawn_closer;
pub use pipeline::ScanPipeline;
pub use worker::{spawn_worker, spawn_workers};
