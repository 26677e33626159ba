// タスク一覧レスポンス生成ハンドラー
//
// リポジトリから全タスクを取得し、JSONレスポンスを構築する。
// すべての終了パスが構造化レスポンスになる: リポジトリやシリアライズの
// 失敗はここで捕捉し、HTTP 500のエラーレスポンスに変換する。

use lambda_http::http::StatusCode;
use lambda_http::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, HeaderMap, HeaderValue};
use lambda_http::{Body, Request, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::domain::Task;
use crate::infrastructure::TaskRepository;

/// エラーレスポンスの固定メッセージ
pub const RETRIEVAL_ERROR_MESSAGE: &str = "An error occurred while retrieving tasks";

/// 成功レスポンスのボディ
#[derive(Debug, Clone, Serialize)]
pub struct TaskListResponse {
    /// 常にtrue
    pub success: bool,
    /// 取得したタスク
    pub data: Vec<Task>,
    /// dataの件数
    pub count: usize,
}

/// タスク一覧レスポンス生成ハンドラー
///
/// リクエストの内容（メソッド、パス、ボディ）によって分岐しない。
/// どのリクエストに対しても全タスクの取得を試みる。
pub struct ListTasksHandler<R>
where
    R: TaskRepository,
{
    /// タスクリポジトリ
    repository: R,
}

impl<R> ListTasksHandler<R>
where
    R: TaskRepository,
{
    /// 新しいハンドラーを作成
    ///
    /// # 引数
    /// * `repository` - タスクリポジトリ
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// リクエストを処理してレスポンスを生成
    ///
    /// # 戻り値
    /// 成功時はHTTP 200、失敗時はHTTP 500。いずれもJSONボディと
    /// CORSヘッダーを含む。この関数が失敗を返すことはない。
    pub async fn handle(&self, request: &Request) -> Response<Body> {
        // リクエスト内容は診断用にログへ記録するのみ
        info!(
            method = %request.method(),
            path = %request.uri().path(),
            "タスク一覧リクエスト受信"
        );

        let response = match self.repository.fetch_all().await {
            Ok(tasks) => {
                info!(count = tasks.len(), "タスク取得成功");
                Self::success_response(tasks)
            }
            Err(e) => {
                error!(error = %e, "タスク取得に失敗");
                Self::error_response(&e.to_string())
            }
        };

        info!(status = response.status().as_u16(), "タスク一覧レスポンス送信");

        response
    }

    /// 成功レスポンスを構築
    ///
    /// シリアライズに失敗した場合はエラーレスポンスにフォールバックする。
    fn success_response(tasks: Vec<Task>) -> Response<Body> {
        let count = tasks.len();
        let body = TaskListResponse {
            success: true,
            data: tasks,
            count,
        };

        match serde_json::to_string(&body) {
            Ok(json) => Self::build_response(StatusCode::OK, json),
            Err(e) => {
                error!(error = %e, "成功レスポンスのシリアライズに失敗");
                Self::error_response(&e.to_string())
            }
        }
    }

    /// エラーレスポンスを構築
    ///
    /// 固定メッセージと失敗の表示テキストを含むHTTP 500レスポンスを返す。
    fn error_response(error: &str) -> Response<Body> {
        // 文字列フィールドのみのValue構築とその文字列化は失敗しない
        let json = serde_json::json!({
            "success": false,
            "message": RETRIEVAL_ERROR_MESSAGE,
            "error": error,
        })
        .to_string();

        Self::build_response(StatusCode::INTERNAL_SERVER_ERROR, json)
    }

    /// ステータスコードとJSONボディからレスポンスを組み立てる
    ///
    /// `Response::new`とフィールド代入のみを使うため失敗しない。
    fn build_response(status: StatusCode, json: String) -> Response<Body> {
        let mut response = Response::new(Body::Text(json));
        *response.status_mut() = status;
        *response.headers_mut() = Self::build_cors_headers();
        response
    }

    /// レスポンスヘッダーを生成
    ///
    /// - Content-Type: application/json
    /// - Access-Control-Allow-Origin: *
    pub fn build_cors_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));

        headers
    }
}
