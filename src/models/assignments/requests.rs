use serde::{Deserialize, Serialize};

use crate::models::students::entities::StudentYear;

// 创建 / 更新作业请求（两个端点共用同一载荷）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentPayload {
    pub title: String,
    pub description: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub target_year: StudentYear,
}

// 评分请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRequest {
    pub grade: i32,
    pub feedback: String,
}
