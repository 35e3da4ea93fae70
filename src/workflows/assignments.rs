//! 管理员作业维护工作流
//!
//! 创建 / 编辑 / 删除作业。字段在任何网络效果之前校验，
//! 截止时间按 RFC3339 解析，成功后全量刷新目录。

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use super::escalate_auth_failure;
use crate::api::PortalApi;
use crate::directory::AssignmentDirectory;
use crate::errors::Result;
use crate::guard::AccessGuard;
use crate::models::assignments::requests::AssignmentPayload;
use crate::models::students::entities::StudentYear;
use crate::session::Role;
use crate::utils::validate::validate_assignment_fields;

/// 来自表单的作业草稿
#[derive(Debug, Clone)]
pub struct AssignmentDraft {
    pub title: String,
    pub description: String,
    // RFC3339 字符串，解析失败归入日期解析错误类
    pub due_date: String,
    pub target_year: StudentYear,
}

impl AssignmentDraft {
    fn into_payload(self) -> Result<AssignmentPayload> {
        validate_assignment_fields(&self.title, &self.description)?;
        let due_date = DateTime::parse_from_rfc3339(&self.due_date)?.with_timezone(&Utc);
        Ok(AssignmentPayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            due_date,
            target_year: self.target_year,
        })
    }
}

pub struct AssignmentAdminWorkflow {
    api: Arc<dyn PortalApi>,
    guard: AccessGuard,
    directory: Arc<AssignmentDirectory>,
}

impl AssignmentAdminWorkflow {
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

    pub async fn create(&self, draft: AssignmentDraft) -> Result<()> {
        self.guard.authorize(Role::Admin)?;
        let payload = draft.into_payload()?;

        self.api
            .create_assignment(payload.clone())
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        info!("Assignment created: {}", payload.title);

        self.directory.refresh().await
    }

    pub async fn update(&self, assignment_id: &str, draft: AssignmentDraft) -> Result<()> {
        self.guard.authorize(Role::Admin)?;
        let payload = draft.into_payload()?;
        let _busy = self.directory.try_begin(assignment_id)?;

        self.api
            .update_assignment(assignment_id, payload)
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        info!("Assignment updated: {}", assignment_id);

        self.directory.refresh().await
    }

    pub async fn delete(&self, assignment_id: &str) -> Result<()> {
        self.guard.authorize(Role::Admin)?;
        let _busy = self.directory.try_begin(assignment_id)?;

        self.api
            .delete_assignment(assignment_id)
            .await
            .map_err(|e| escalate_auth_failure(&self.guard, e))?;
        info!("Assignment deleted: {}", assignment_id);

        self.directory.refresh().await
    }
}
