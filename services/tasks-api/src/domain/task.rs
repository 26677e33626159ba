// タスクモデル
//
// DynamoDBテーブルに保存されているタスクレコードの構造を定義する。
// このサービスはタスクを読み取るだけで、作成・更新・削除は行わない。

use serde::{Deserialize, Serialize};

/// タスクレコード
///
/// テーブル上の属性名およびJSONレスポンスのフィールド名はcamelCase。
/// オプションフィールドは未設定時にJSONシリアライズから省略される。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// タスクの一意識別子
    pub id: String,

    /// タスクのタイトル
    pub title: String,

    /// タスクの詳細説明
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// 完了フラグ
    pub completed: bool,

    /// 作成日時（外部の書き込み側が生成したタイムスタンプ文字列）
    pub created_at: String,

    /// 更新日時
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    // テストタスク作成ヘルパー
    fn sample_task() -> Task {
        Task {
            id: "task-1".to_string(),
            title: "Write report".to_string(),
            description: Some("Quarterly summary".to_string()),
            completed: false,
            created_at: "2024-01-15T09:00:00Z".to_string(),
            updated_at: Some("2024-01-16T10:30:00Z".to_string()),
        }
    }

    /// シリアライズ時のフィールド名がcamelCaseになる
    #[test]
    fn test_serialize_uses_camel_case_keys() {
        let task = sample_task();
        let json: serde_json::Value = serde_json::to_value(&task).unwrap();

        assert_eq!(json["id"], "task-1");
        assert_eq!(json["title"], "Write report");
        assert_eq!(json["description"], "Quarterly summary");
        assert_eq!(json["completed"], false);
        assert_eq!(json["createdAt"], "2024-01-15T09:00:00Z");
        assert_eq!(json["updatedAt"], "2024-01-16T10:30:00Z");

        // snake_caseキーは存在しない
        assert!(json.get("created_at").is_none());
        assert!(json.get("updated_at").is_none());
    }

    /// 未設定のオプションフィールドはシリアライズ時に省略される
    #[test]
    fn test_serialize_omits_none_fields() {
        let task = Task {
            id: "task-2".to_string(),
            title: "Minimal".to_string(),
            description: None,
            completed: true,
            created_at: "2024-02-01T00:00:00Z".to_string(),
            updated_at: None,
        };

        let json: serde_json::Value = serde_json::to_value(&task).unwrap();

        assert!(json.get("description").is_none());
        assert!(json.get("updatedAt").is_none());

        // 必須フィールドは常に存在する
        assert_eq!(json["id"], "task-2");
        assert_eq!(json["completed"], true);
        assert_eq!(json["createdAt"], "2024-02-01T00:00:00Z");
    }

    /// 全フィールドを含むJSONからデシリアライズできる
    #[test]
    fn test_deserialize_full_task() {
        let json = r#"{
            "id": "task-3",
            "title": "Review PR",
            "description": "Check the migration",
            "completed": true,
            "createdAt": "2024-03-01T12:00:00Z",
            "updatedAt": "2024-03-02T08:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "task-3");
        assert_eq!(task.title, "Review PR");
        assert_eq!(task.description, Some("Check the migration".to_string()));
        assert!(task.completed);
        assert_eq!(task.created_at, "2024-03-01T12:00:00Z");
        assert_eq!(task.updated_at, Some("2024-03-02T08:00:00Z".to_string()));
    }

    /// オプションフィールドが欠けたJSONからデシリアライズできる
    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "task-4",
            "title": "Bare task",
            "completed": false,
            "createdAt": "2024-04-01T00:00:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();

        assert_eq!(task.id, "task-4");
        assert!(task.description.is_none());
        assert!(task.updated_at.is_none());
    }

    /// 必須フィールドが欠けたJSONはデシリアライズに失敗する
    #[test]
    fn test_deserialize_missing_required_field_fails() {
        // titleがない
        let json = r#"{
            "id": "task-5",
            "completed": false,
            "createdAt": "2024-05-01T00:00:00Z"
        }"#;

        let result: Result<Task, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    /// シリアライズ→デシリアライズで値が保持される
    #[test]
    fn test_round_trip() {
        let task = sample_task();
        let json = serde_json::to_string(&task).unwrap();
        let restored: Task = serde_json::from_str(&json).unwrap();

        assert_eq!(task, restored);
    }
}
