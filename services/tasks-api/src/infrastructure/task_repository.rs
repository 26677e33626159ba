// DynamoDBでタスクを読み取るためのタスクリポジトリ
//
// テーブル全体を1回のScanで読み取り、タスクのリストとして返す。
// ページネーションは行わない: DynamoDBが結果を切り詰めた場合、
// 残りのページは取得せずそのまま返す（1MBスキャン上限を超える
// テーブルでは全件取得は保証されない）。

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use aws_sdk_dynamodb::types::AttributeValue;
use thiserror::Error;
use tracing::{error, warn};

use crate::domain::Task;

/// タスクリポジトリ操作のエラー型
///
/// ストア固有の詳細は発生箇所でログに記録し、伝播する値には含めない。
/// 呼び出し側には固定の汎用メッセージのみが見える。
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskRepositoryError {
    /// DynamoDBからの読み取りに失敗
    #[error("Failed to fetch tasks from database")]
    ReadError,

    /// 取得アイテムのデシリアライズに失敗
    #[error("Failed to deserialize task data")]
    DeserializationError,
}

/// タスク読み取り用トレイト
///
/// 異なる実装を可能にする（実際のDynamoDB、テスト用モック）。
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// テーブル内の全タスクを取得
    ///
    /// # 戻り値
    /// * `Ok(Vec<Task>)` - ストアが返した順序のタスク（順序保証なし、空の場合は空Vec）
    /// * `Err(TaskRepositoryError)` - 読み取りまたはデシリアライズエラー
    async fn fetch_all(&self) -> Result<Vec<Task>, TaskRepositoryError>;
}

/// TaskRepositoryのDynamoDB実装
#[derive(Debug, Clone)]
pub struct DynamoTaskRepository {
    /// DynamoDBクライアント
    client: DynamoDbClient,
    /// タスクテーブル名
    table_name: String,
}

impl DynamoTaskRepository {
    /// 新しいDynamoTaskRepositoryを作成
    ///
    /// # 引数
    /// * `client` - DynamoDBクライアント
    /// * `table_name` - タスクテーブルの名前
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// スキャン結果のアイテムをタスクにデシリアライズ
    ///
    /// 属性名はテーブル上のcamelCase（id, title, description, completed,
    /// createdAt, updatedAt）をそのまま使用する。
    fn deserialize_items(
        items: Vec<HashMap<String, AttributeValue>>,
    ) -> Result<Vec<Task>, TaskRepositoryError> {
        serde_dynamo::aws_sdk_dynamodb_1::from_items(items).map_err(|e| {
            error!(error = %e, "タスクアイテムのデシリアライズに失敗");
            TaskRepositoryError::DeserializationError
        })
    }
}

#[async_trait]
impl TaskRepository for DynamoTaskRepository {
    async fn fetch_all(&self) -> Result<Vec<Task>, TaskRepositoryError> {
        // テーブル全体を1回のリクエストで読み取る
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                error!(
                    table_name = %self.table_name,
                    error = %service_error,
                    "DynamoDBスキャンに失敗"
                );
                TaskRepositoryError::ReadError
            })?;

        // 切り詰められた結果はそのまま受け入れる（追加ページは取得しない）
        if result.last_evaluated_key.is_some() {
            warn!(
                table_name = %self.table_name,
                "スキャン結果が切り詰められた: テーブルが1回のスキャン上限を超えている"
            );
        }

        let items = result.items.unwrap_or_default();
        Self::deserialize_items(items)
    }
}
