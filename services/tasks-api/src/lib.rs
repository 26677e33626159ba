// アプリケーション層モジュール
pub mod application;

// ドメイン層モジュール
pub mod domain;

// インフラストラクチャ層モジュール
pub mod infrastructure;
