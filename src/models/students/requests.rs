use serde::{Deserialize, Serialize};

use super::entities::StudentYear;

// 管理员创建学生请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStudentRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub year: StudentYear,
}

// 管理员更新学生请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStudentRequest {
    pub name: String,
    pub email: String,
    pub year: StudentYear,
}
