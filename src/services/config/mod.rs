// 設定管理サービス

pub mod implementations;

pub use implementations::DefaultScanConfig;
