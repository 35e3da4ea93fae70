//! 会话上下文
//!
//! 登录 / 注册成功后建立，显式注入到每个受门控的组件中；
//! 登出或凭证失效时整体销毁。角色一经建立不可变更，
//! 任何时刻都不存在同时持有管理员与学生能力的会话。

use std::sync::RwLock;

use crate::models::students::entities::Student;

// 调用方角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,   // 管理员
    Student, // 学生
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// 会话身份：封闭的带负载变体。
// 管理员只携带显示名，学生携带完整学生档案（含学年）。
#[derive(Debug, Clone, PartialEq)]
pub enum SessionIdentity {
    Admin { name: String },
    Student { profile: Student },
}

// 会话：调用方在本次运行中的角色与身份
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    // 数据服务签发的不透明凭证
    pub token: String,
    pub identity: SessionIdentity,
}

impl Session {
    pub fn admin(token: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            identity: SessionIdentity::Admin { name: name.into() },
        }
    }

    pub fn student(token: impl Into<String>, profile: Student) -> Self {
        Self {
            token: token.into(),
            identity: SessionIdentity::Student { profile },
        }
    }

    pub fn role(&self) -> Role {
        match &self.identity {
            SessionIdentity::Admin { .. } => Role::Admin,
            SessionIdentity::Student { .. } => Role::Student,
        }
    }

    pub fn display_name(&self) -> &str {
        match &self.identity {
            SessionIdentity::Admin { name } => name,
            SessionIdentity::Student { profile } => &profile.name,
        }
    }

    pub fn student_profile(&self) -> Option<&Student> {
        match &self.identity {
            SessionIdentity::Admin { .. } => None,
            SessionIdentity::Student { profile } => Some(profile),
        }
    }
}

/// 单写者会话存储
///
/// 凭证与身份作为一个整体替换或清除，不存在"有学生档案无 token"
/// 之类的半残会话状态。
#[derive(Debug, Default)]
pub struct SessionStore {
    inner: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 建立会话（整体替换，登录 / 注册成功后调用一次）
    pub fn establish(&self, session: Session) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(session);
    }

    /// 清除会话（登出或凭证失效时调用，原子清空全部字段）
    pub fn clear(&self) {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// 当前会话快照
    pub fn current(&self) -> Option<Session> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.clone()
    }

    /// 当前凭证
    pub fn token(&self) -> Option<String> {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        let guard = self.inner.read().unwrap_or_else(|e| e.into_inner());
        guard.is_some()
    }

    /// 用服务端刷新的凭证原地替换 token，延长会话
    ///
    /// 会话已被清除时刷新结果直接丢弃，返回 false。
    pub fn refresh_token(&self, token: impl Into<String>) -> bool {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        match guard.as_mut() {
            Some(session) => {
                session.token = token.into();
                true
            }
            None => false,
        }
    }
}
