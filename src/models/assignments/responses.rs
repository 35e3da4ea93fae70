use serde::{Deserialize, Serialize};

use crate::models::students::entities::StudentYear;

// 学生视图的作业（服务端已按学年过滤，并把本人的提交拍平到作业上）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentAssignment {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub target_year: StudentYear,
    // 本人是否已提交
    #[serde(default)]
    pub submitted: bool,
    // 本人提交的文件名（下载用）
    #[serde(default)]
    pub file_name: Option<String>,
    // 分数（未评分时缺失）
    #[serde(default)]
    pub grade: Option<i32>,
    // 评语
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
