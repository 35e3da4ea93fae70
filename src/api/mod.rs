//! 外部数据服务接口
//!
//! `PortalApi` 是核心与数据服务之间的 trait 接缝：工作流与目录只依赖
//! trait 对象，HTTP 细节（bearer 认证、token 刷新、multipart 上传）
//! 全部收敛在 `http` 实现里，测试则注入内存假实现。

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{AssignmentPayload, GradeRequest};
use crate::models::assignments::responses::StudentAssignment;
use crate::models::auth::{
    AdminLoginRequest, AdminLoginResponse, RegisterRequest, RegisterResponse, StudentLoginRequest,
    StudentLoginResponse,
};
use crate::models::files::entities::SubmissionFile;
use crate::models::notices::{Notice, NoticePayload};
use crate::models::students::entities::Student;
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};

pub mod http;

pub use http::HttpPortalApi;

#[async_trait]
pub trait PortalApi: Send + Sync {
    /// 认证方法
    // 学生登录
    async fn student_login(&self, request: StudentLoginRequest) -> Result<StudentLoginResponse>;
    // 管理员登录
    async fn admin_login(&self, request: AdminLoginRequest) -> Result<AdminLoginResponse>;
    // 学生注册（注册成功即建立学生会话）
    async fn register_student(&self, request: RegisterRequest) -> Result<RegisterResponse>;
    // 学生档案
    async fn student_profile(&self) -> Result<Student>;

    /// 作业方法
    // 学生视图：按学年过滤、拍平本人提交
    async fn list_assignments(&self) -> Result<Vec<StudentAssignment>>;
    // 管理员视图：全部作业及提交记录
    async fn list_all_assignments(&self) -> Result<Vec<Assignment>>;
    // 创建作业
    async fn create_assignment(&self, payload: AssignmentPayload) -> Result<()>;
    // 更新作业
    async fn update_assignment(&self, assignment_id: &str, payload: AssignmentPayload)
    -> Result<()>;
    // 删除作业
    async fn delete_assignment(&self, assignment_id: &str) -> Result<()>;
    // 提交作业（multipart 文件体，单次原子远程调用）
    async fn submit_assignment(&self, assignment_id: &str, file: SubmissionFile) -> Result<()>;
    // 评分（对既有提交原地写入分数与评语）
    async fn grade_submission(
        &self,
        assignment_id: &str,
        submission_id: &str,
        request: GradeRequest,
    ) -> Result<()>;
    // 下载提交文件（不透明字节流）
    async fn download_submission(&self, assignment_id: &str, file_name: &str) -> Result<Vec<u8>>;

    /// 公告方法（纯数据透传）
    async fn list_notices(&self) -> Result<Vec<Notice>>;
    async fn create_notice(&self, payload: NoticePayload) -> Result<()>;
    async fn update_notice(&self, notice_id: &str, payload: NoticePayload) -> Result<()>;
    async fn delete_notice(&self, notice_id: &str) -> Result<()>;

    /// 学生管理方法（管理员）
    async fn list_students(&self) -> Result<Vec<Student>>;
    async fn create_student(&self, request: CreateStudentRequest) -> Result<()>;
    async fn update_student(&self, student_id: &str, request: UpdateStudentRequest) -> Result<()>;
    async fn delete_student(&self, student_id: &str) -> Result<()>;
}

#[cfg(test)]
pub mod fake;
