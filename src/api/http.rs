use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Response, StatusCode, multipart};
use tracing::debug;

use super::PortalApi;
use crate::config::AppConfig;
use crate::errors::{PortalError, Result};
use crate::models::ServiceMessage;
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
use crate::session::SessionStore;

// 服务端随响应下发的刷新 token 头
const REFRESHED_TOKEN_HEADER: &str = "New-Access-Token";

/// 数据服务的 HTTP 客户端实现
pub struct HttpPortalApi {
    client: reqwest::Client,
    base_url: String,
    sessions: Arc<SessionStore>,
}

impl HttpPortalApi {
    pub fn new(config: &AppConfig, sessions: Arc<SessionStore>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.service.timeouts.connect))
            .timeout(Duration::from_secs(config.service.timeouts.request))
            .build()?;

        Ok(Self {
            client,
            base_url: config.service.base_url.trim_end_matches('/').to_string(),
            sessions,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// 当前会话凭证（缺失即认证错误，交由守卫的拒绝路径处理）
    fn bearer(&self) -> Result<String> {
        self.sessions
            .token()
            .ok_or_else(|| PortalError::authentication("No authentication token found"))
    }

    /// 捕获服务端刷新的 token 并原地续期会话
    fn capture_refreshed_token(&self, response: &Response) {
        if let Some(value) = response.headers().get(REFRESHED_TOKEN_HEADER)
            && let Ok(token) = value.to_str()
            && !token.is_empty()
        {
            if self.sessions.refresh_token(token) {
                debug!("Session token refreshed by service");
            }
        }
    }

    /// 统一响应处理：捕获刷新 token，按状态码映射错误分类
    async fn handle(&self, response: Response, fallback: &str) -> Result<Response> {
        self.capture_refreshed_token(&response);

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response
            .json::<ServiceMessage>()
            .await
            .unwrap_or_default()
            .message_or(fallback);

        Err(match status {
            StatusCode::UNAUTHORIZED => PortalError::authentication(message),
            StatusCode::FORBIDDEN => PortalError::authorization(message),
            StatusCode::NOT_FOUND => PortalError::not_found(message),
            StatusCode::CONFLICT => PortalError::conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                PortalError::validation(message)
            }
            _ => PortalError::transport(format!("{status}: {message}")),
        })
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        fallback: &str,
    ) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = self.handle(response, fallback).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send_json<B: serde::Serialize>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<()> {
        let response = self
            .client
            .request(method, self.url(path))
            .bearer_auth(self.bearer()?)
            .json(body)
            .send()
            .await?;
        self.handle(response, fallback).await?;
        Ok(())
    }

    async fn delete(&self, path: &str, fallback: &str) -> Result<()> {
        let response = self
            .client
            .delete(self.url(path))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        self.handle(response, fallback).await?;
        Ok(())
    }
}

#[async_trait]
impl PortalApi for HttpPortalApi {
    async fn student_login(&self, request: StudentLoginRequest) -> Result<StudentLoginResponse> {
        let response = self
            .client
            .post(self.url("/student/login"))
            .json(&request)
            .send()
            .await?;
        let response = self.handle(response, "Invalid credentials").await?;
        Ok(response.json().await?)
    }

    async fn admin_login(&self, request: AdminLoginRequest) -> Result<AdminLoginResponse> {
        let response = self
            .client
            .post(self.url("/admin/login"))
            .json(&request)
            .send()
            .await?;
        let response = self.handle(response, "Invalid credentials").await?;
        Ok(response.json().await?)
    }

    async fn register_student(&self, request: RegisterRequest) -> Result<RegisterResponse> {
        let response = self
            .client
            .post(self.url("/student/register"))
            .json(&request)
            .send()
            .await?;
        let response = self.handle(response, "Registration failed").await?;
        Ok(response.json().await?)
    }

    async fn student_profile(&self) -> Result<Student> {
        self.get_json("/student/profile", "Failed to fetch profile")
            .await
    }

    async fn list_assignments(&self) -> Result<Vec<StudentAssignment>> {
        self.get_json("/assignments", "Failed to fetch assignments")
            .await
    }

    async fn list_all_assignments(&self) -> Result<Vec<Assignment>> {
        self.get_json("/assignments/all", "Failed to fetch assignments")
            .await
    }

    async fn create_assignment(&self, payload: AssignmentPayload) -> Result<()> {
        self.send_json(
            reqwest::Method::POST,
            "/assignments/upload",
            &payload,
            "Failed to save assignment",
        )
        .await
    }

    async fn update_assignment(
        &self,
        assignment_id: &str,
        payload: AssignmentPayload,
    ) -> Result<()> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/assignments/{assignment_id}"),
            &payload,
            "Failed to save assignment",
        )
        .await
    }

    async fn delete_assignment(&self, assignment_id: &str) -> Result<()> {
        self.delete(
            &format!("/assignments/{assignment_id}"),
            "Failed to delete assignment",
        )
        .await
    }

    async fn submit_assignment(&self, assignment_id: &str, file: SubmissionFile) -> Result<()> {
        let part = multipart::Part::bytes(file.content).file_name(file.file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.url(&format!("/assignments/{assignment_id}/submit")))
            .bearer_auth(self.bearer()?)
            .multipart(form)
            .send()
            .await?;
        self.handle(response, "Failed to submit assignment").await?;
        Ok(())
    }

    async fn grade_submission(
        &self,
        assignment_id: &str,
        submission_id: &str,
        request: GradeRequest,
    ) -> Result<()> {
        self.send_json(
            reqwest::Method::POST,
            &format!("/assignments/{assignment_id}/grade/{submission_id}"),
            &request,
            "Failed to grade assignment",
        )
        .await
    }

    async fn download_submission(&self, assignment_id: &str, file_name: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(self.url(&format!(
                "/assignments/{assignment_id}/download/{file_name}"
            )))
            .bearer_auth(self.bearer()?)
            .send()
            .await?;
        let response = self.handle(response, "Failed to download file").await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn list_notices(&self) -> Result<Vec<Notice>> {
        self.get_json("/notices", "Failed to fetch notices").await
    }

    async fn create_notice(&self, payload: NoticePayload) -> Result<()> {
        self.send_json(
            reqwest::Method::POST,
            "/notices/create",
            &payload,
            "Failed to save notice",
        )
        .await
    }

    async fn update_notice(&self, notice_id: &str, payload: NoticePayload) -> Result<()> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/notices/{notice_id}"),
            &payload,
            "Failed to save notice",
        )
        .await
    }

    async fn delete_notice(&self, notice_id: &str) -> Result<()> {
        self.delete(&format!("/notices/{notice_id}"), "Failed to delete notice")
            .await
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        self.get_json("/admin/students", "Failed to fetch students")
            .await
    }

    async fn create_student(&self, request: CreateStudentRequest) -> Result<()> {
        self.send_json(
            reqwest::Method::POST,
            "/admin/students",
            &request,
            "Failed to save student",
        )
        .await
    }

    async fn update_student(&self, student_id: &str, request: UpdateStudentRequest) -> Result<()> {
        self.send_json(
            reqwest::Method::PUT,
            &format!("/admin/students/{student_id}"),
            &request,
            "Failed to save student",
        )
        .await
    }

    async fn delete_student(&self, student_id: &str) -> Result<()> {
        self.delete(
            &format!("/admin/students/{student_id}"),
            "Failed to delete student",
        )
        .await
    }
}
