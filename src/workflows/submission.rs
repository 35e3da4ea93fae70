//! 提交工作流
//!
//! 学生对一份作业的一次性文件提交：NotSubmitted -> Submitting -> Submitted。
//! Submitted 对学生是终态，之后的 Graded 转换由评分工作流完成，学生只能观察。

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::escalate_auth_failure;
use crate::api::PortalApi;
use crate::config::UploadConfig;
use crate::directory::AssignmentDirectory;
use crate::errors::{PortalError, Result};
use crate::guard::AccessGuard;
use crate::models::files::entities::{DownloadedFile, SubmissionFile};
use crate::session::Role;
use crate::utils::validate::validate_submission_file;

pub struct SubmissionWorkflow {
    api: Arc<dyn PortalApi>,
    guard: AccessGuard,
    directory: Arc<AssignmentDirectory>,
    upload: UploadConfig,
}

impl SubmissionWorkflow {
    pub fn new(
        api: Arc<dyn PortalApi>,
        guard: AccessGuard,
        directory: Arc<AssignmentDirectory>,
        upload: UploadConfig,
    ) -> Self {
        Self {
            api,
            guard,
            directory,
            upload,
        }
    }

    /// 提交作业
    ///
    /// 前置条件全部在本地检查完毕才发出网络调用，失败的尝试不会
    /// 留下半条提交记录。成功后重新派生的状态为 Submitted。
    pub async fn submit(&self, assignment_id: &str, file: SubmissionFile) -> Result<()> {
        // 1. 角色门控（每次进入都检查）
        let session = self.guard.authorize(Role::Student)?;

        // 2. 文件校验：任何网络效果之前拒绝非法文件
        validate_submission_file(&file, &self.upload)?;

        // 3. 从当前快照检查可提交性
        let assignment = self
            .directory
            .student_assignment(assignment_id)
            .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
        let now = Utc::now();
        if !assignment.can_submit(now) {
            return Err(if assignment.submitted {
                PortalError::conflict("Assignment already submitted")
            } else {
                PortalError::conflict("The submission deadline has passed")
            });
        }

        // 4. 同一作业的第二个动作在途期间被拒绝
        let _busy = self.directory.try_begin(assignment_id)?;

        // 5. 单次原子远程调用
        self.api
            .submit_assignment(assignment_id, file)
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        info!(
            "Submission recorded for assignment {} by {}",
            assignment_id,
            session.display_name()
        );

        // 6. 全量刷新，避免陈旧的派生状态
        self.directory.refresh().await
    }

    /// 下载本人的提交文件
    pub async fn download(&self, assignment_id: &str) -> Result<DownloadedFile> {
        self.guard.authorize(Role::Student)?;

        let assignment = self
            .directory
            .student_assignment(assignment_id)
            .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
        let file_name = assignment
            .file_name
            .ok_or_else(|| PortalError::not_found("No submission file to download"))?;

        let content = self
            .api
            .download_submission(assignment_id, &file_name)
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        Ok(DownloadedFile { file_name, content })
    }
}
