// DynamoDB接続設定
//
// 環境変数から読み込んだDynamoDBクライアントとテーブル名を保持する。
// 設定は起動時に一度だけ読み込み、ハンドラーへは構築時に渡す。
// 以降の処理が環境変数を直接参照することはない。

use aws_sdk_dynamodb::Client as DynamoDbClient;

/// TASKS_TABLE_NAME未設定時に使用するテーブル名
pub const DEFAULT_TASKS_TABLE: &str = "TasksTable";

/// テーブル名とクライアントを持つDynamoDB設定
#[derive(Debug, Clone)]
pub struct DynamoDbConfig {
    /// DynamoDBクライアントインスタンス
    client: DynamoDbClient,
    /// タスクテーブル名
    tasks_table: String,
}

impl DynamoDbConfig {
    /// 環境からAWS設定を読み込み、新しいDynamoDbConfigを作成
    ///
    /// 環境変数:
    /// - AWS認証情報・リージョン: aws-configにより自動読み込み
    /// - TASKS_TABLE_NAME: タスク用DynamoDBテーブル名
    ///   （未設定または空の場合は`TasksTable`にフォールバック）
    pub async fn from_env() -> Self {
        // 環境からAWS設定を読み込み（認証情報、リージョンなど）
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;

        // AWS設定からDynamoDBクライアントを作成
        let client = DynamoDbClient::new(&aws_config);

        Self {
            client,
            tasks_table: resolve_table_name(),
        }
    }

    /// 明示的な値で新しいDynamoDbConfigを作成（テスト用）
    pub fn new(client: DynamoDbClient, tasks_table: String) -> Self {
        Self {
            client,
            tasks_table,
        }
    }

    /// DynamoDBクライアントへの参照を取得
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// タスクテーブル名を取得
    pub fn tasks_table(&self) -> &str {
        &self.tasks_table
    }
}

/// TASKS_TABLE_NAME環境変数からテーブル名を解決
///
/// 未設定または空白のみの値はデフォルト名として扱う。
fn resolve_table_name() -> String {
    std::env::var("TASKS_TABLE_NAME")
        .ok()
        .filter(|name| !name.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_TASKS_TABLE.to_string())
}
