// アプリケーション層モジュール
pub mod list_tasks_handler;

// 再エクスポート
pub use list_tasks_handler::{ListTasksHandler, RETRIEVAL_ERROR_MESSAGE, TaskListResponse};
