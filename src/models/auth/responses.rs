use serde::{Deserialize, Serialize};

use crate::models::students::entities::{Student, StudentYear};

// 学生登录响应（token + 完整学生档案）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentLoginResponse {
    pub token: String,
    pub student: Student,
}

// 管理员登录响应（token + 显示名，无额外负载）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub name: String,
}

// 注册响应（注册成功即建立学生会话）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub token: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    pub year: StudentYear,
}

impl RegisterResponse {
    /// 注册响应不带学生 ID，按档案字段拼装学生记录
    pub fn into_student(self) -> (String, Student) {
        let student = Student {
            id: String::new(),
            name: self.name,
            email: self.email,
            year: self.year,
        };
        (self.token, student)
    }
}
