use serde::{Deserialize, Serialize};

use crate::models::students::entities::StudentYear;

// 派生状态（只读计算，永不持久化）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentStatus {
    Pending,   // 未提交，未过截止时间
    Overdue,   // 未提交，已过截止时间
    Submitted, // 已提交，未评分
    Graded,    // 已提交，已评分
}

impl AssignmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssignmentStatus::Pending => "Pending",
            AssignmentStatus::Overdue => "Overdue",
            AssignmentStatus::Submitted => "Submitted",
            AssignmentStatus::Graded => "Graded",
        }
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 提交记录中内嵌的学生引用
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmissionStudent {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

// 提交实体（内嵌于作业，每个 (作业, 学生) 至多一条）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    // 唯一 ID
    #[serde(rename = "_id")]
    pub id: String,
    // 提交者
    pub student: SubmissionStudent,
    // 服务端存储的文件名
    #[serde(default)]
    pub file_name: Option<String>,
    // 上传时的原始文件名
    #[serde(default)]
    pub original_name: Option<String>,
    // 提交时间
    #[serde(default)]
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 分数（0-100，未评分时缺失）
    #[serde(default)]
    pub grade: Option<i32>,
    // 评语
    #[serde(default)]
    pub feedback: Option<String>,
}

// 作业实体（管理员视图：携带全部提交记录）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    // 唯一 ID
    #[serde(rename = "_id")]
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 目标学年（该学年的学生可见）
    pub target_year: StudentYear,
    // 提交记录（按学生去重）
    #[serde(default)]
    pub submissions: Vec<Submission>,
    // 创建时间
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Assignment {
    /// 查找某学生的提交记录
    pub fn submission_for(&self, student_id: &str) -> Option<&Submission> {
        self.submissions
            .iter()
            .find(|sub| sub.student.id == student_id)
    }
}
