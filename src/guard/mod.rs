//! 访问守卫
//!
//! 进入任何角色门控的操作 / 视图前调用，角色不匹配即拒绝。
//! 每次进入门控入口都要重新检查，而不是只在登录时检查一次。
//! 这是客户端侧的体验性门控，不是安全边界；数据服务在服务端
//! 对每个请求另行鉴权。

use std::sync::Arc;

use tracing::info;

use crate::errors::PortalError;
use crate::session::{Role, Session, SessionIdentity, SessionStore};

// 拒绝原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    // 无会话凭证
    Unauthenticated,
    // 角色不匹配（管理员不得进入学生视图，反之亦然）
    WrongRole { required: Role, actual: Role },
    // 学生会话缺少可用的学生档案
    IncompleteSession,
}

impl std::fmt::Display for AccessDenied {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AccessDenied::Unauthenticated => write!(f, "unauthenticated"),
            AccessDenied::WrongRole { required, actual } => {
                write!(f, "wrong role: required {required}, session is {actual}")
            }
            AccessDenied::IncompleteSession => write!(f, "incomplete session"),
        }
    }
}

impl From<AccessDenied> for PortalError {
    fn from(denied: AccessDenied) -> Self {
        match denied {
            AccessDenied::Unauthenticated => PortalError::authentication(denied.to_string()),
            AccessDenied::WrongRole { .. } | AccessDenied::IncompleteSession => {
                PortalError::authorization(denied.to_string())
            }
        }
    }
}

/// 角色门控守卫
#[derive(Clone)]
pub struct AccessGuard {
    sessions: Arc<SessionStore>,
}

impl AccessGuard {
    pub fn new(sessions: Arc<SessionStore>) -> Self {
        Self { sessions }
    }

    /// 按所需角色授权当前会话
    ///
    /// 通过时返回会话快照供调用方使用；拒绝时调用方应回到
    /// 未认证入口，被门控的操作不得产生任何部分效果。
    pub fn authorize(&self, required: Role) -> Result<Session, AccessDenied> {
        let session = match self.sessions.current() {
            Some(session) => session,
            None => {
                info!("Access denied: no session token present");
                return Err(AccessDenied::Unauthenticated);
            }
        };

        // 对封闭身份变体做穷尽匹配，杜绝"角色标志位漏判"一类问题
        match (&session.identity, required) {
            (SessionIdentity::Admin { .. }, Role::Admin) => Ok(session),
            (SessionIdentity::Student { profile }, Role::Student) => {
                if profile.name.is_empty() {
                    info!("Access denied: student session has no usable profile");
                    return Err(AccessDenied::IncompleteSession);
                }
                Ok(session)
            }
            (identity, required) => {
                let actual = match identity {
                    SessionIdentity::Admin { .. } => Role::Admin,
                    SessionIdentity::Student { .. } => Role::Student,
                };
                info!(
                    "Access denied for {} (role: {}). Required role: {}",
                    session.display_name(),
                    actual,
                    required
                );
                Err(AccessDenied::WrongRole { required, actual })
            }
        }
    }

    /// 认证类失败的统一出口：清会话并回到拒绝路径
    pub fn force_logout(&self) {
        self.sessions.clear();
    }
}
