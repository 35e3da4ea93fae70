use serde::{Deserialize, Serialize};

use crate::models::students::entities::StudentYear;

// 学生登录请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentLoginRequest {
    pub name: String,
    pub password: String,
}

// 管理员登录请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginRequest {
    pub name: String,
    pub password: String,
}

// 学生注册请求（学年必填，决定可见的作业集合）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub year: StudentYear,
}
