/// タスク一覧HTTP Lambdaエントリポイント
///
/// Lambda Function URLまたはAPI Gateway経由のHTTPリクエストを処理し、
/// DynamoDBテーブルの全タスクをJSONレスポンスとして返却する。
use lambda_http::{Body, Error, Request, Response, run, service_fn};
use tasks_api::application::ListTasksHandler;
use tasks_api::infrastructure::{DynamoDbConfig, DynamoTaskRepository, init_logging};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("タスク一覧Lambda関数を初期化");

    // 設定は起動時に一度だけ読み込み、warm start間で
    // クライアントとハンドラーを再利用する
    let config = DynamoDbConfig::from_env().await;

    info!(table_name = config.tasks_table(), "DynamoDB設定を読み込み");

    let repository =
        DynamoTaskRepository::new(config.client().clone(), config.tasks_table().to_string());
    let handler = ListTasksHandler::new(repository);
    let handler = &handler;

    // Lambda関数を実行
    run(service_fn(move |request: Request| async move {
        Ok::<Response<Body>, Error>(handler.handle(&request).await)
    }))
    .await
}
