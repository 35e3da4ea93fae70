//! 评分工作流
//!
//! 管理员对已存在的提交记录写入分数与评语。重复评分会原地覆盖
//! 同一条记录（后写覆盖先写，不做跨会话加锁），不会产生第二条记录。

use std::sync::Arc;

use tracing::info;

use super::escalate_auth_failure;
use crate::api::PortalApi;
use crate::directory::AssignmentDirectory;
use crate::errors::{PortalError, Result};
use crate::guard::AccessGuard;
use crate::models::assignments::entities::Submission;
use crate::models::assignments::requests::GradeRequest;
use crate::models::files::entities::DownloadedFile;
use crate::session::Role;
use crate::utils::validate::validate_grade;

pub struct GradingWorkflow {
    api: Arc<dyn PortalApi>,
    guard: AccessGuard,
    directory: Arc<AssignmentDirectory>,
}

impl GradingWorkflow {
    pub fn new(
        api: Arc<dyn PortalApi>,
        guard: AccessGuard,
        directory: Arc<AssignmentDirectory>,
    ) -> Self {
        Self {
            api,
            guard,
            directory,
        }
    }

    fn find_submission(&self, assignment_id: &str, student_id: &str) -> Result<Submission> {
        let assignment = self
            .directory
            .admin_assignment(assignment_id)
            .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
        assignment
            .submission_for(student_id)
            .cloned()
            .ok_or_else(|| PortalError::not_found("Submission not found"))
    }

    /// 为某学生的提交写入分数与评语
    ///
    /// 分数在任何网络效果之前校验；目标提交不存在时直接拒绝，
    /// 不会凭空创建提交记录。
    pub async fn grade(
        &self,
        assignment_id: &str,
        student_id: &str,
        grade: i32,
        feedback: impl Into<String>,
    ) -> Result<()> {
        self.guard.authorize(Role::Admin)?;
        validate_grade(grade)?;

        let submission = self.find_submission(assignment_id, student_id)?;
        let _busy = self.directory.try_begin(assignment_id)?;

        self.api
            .grade_submission(
                assignment_id,
                &submission.id,
                GradeRequest {
                    grade,
                    feedback: feedback.into(),
                },
            )
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        info!(
            "Grade {} recorded for submission {} on assignment {}",
            grade, submission.id, assignment_id
        );

        self.directory.refresh().await
    }

    /// 下载某学生的提交文件（回显时优先使用原始文件名）
    pub async fn download(&self, assignment_id: &str, student_id: &str) -> Result<DownloadedFile> {
        self.guard.authorize(Role::Admin)?;

        let submission = self.find_submission(assignment_id, student_id)?;
        let stored_name = submission
            .file_name
            .ok_or_else(|| PortalError::not_found("No submission file to download"))?;
        let display_name = submission.original_name.unwrap_or_else(|| stored_name.clone());

        let content = self
            .api
            .download_submission(assignment_id, &stored_name)
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        Ok(DownloadedFile {
            file_name: display_name,
            content,
        })
    }
}
