//! 业务工作流
//!
//! 每个工作流操作都重新走一遍访问守卫，本地校验全部通过后才发出
//! 单次原子远程调用，成功后全量刷新作业目录。失败的调用不产生
//! 任何部分效果，也不会自动重试。

use crate::errors::PortalError;
use crate::guard::AccessGuard;

pub mod assignments;
pub mod grading;
pub mod submission;

pub use assignments::{AssignmentAdminWorkflow, AssignmentDraft};
pub use grading::GradingWorkflow;
pub use submission::SubmissionWorkflow;

/// 认证类失败的统一处理：清除会话后把错误原样向上传递
pub(crate) fn escalate_auth_failure(guard: &AccessGuard, err: PortalError) -> PortalError {
    if err.is_authentication() {
        guard.force_logout();
    }
    err
}
