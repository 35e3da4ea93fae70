//! 作业目录
//!
//! 当前视图作业集合的读穿缓存，按角色划分：管理员看到全部作业，
//! 学生只看到服务端按学年过滤后的集合。每次增删改 / 提交 / 评分后
//! 整体替换快照（不做增量补丁），避免展示陈旧的派生状态。
//! 刷新失败时保留上一份快照并记录可见的错误指示，绝不出现半更新列表。

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

use crate::api::PortalApi;
use crate::errors::{PortalError, Result};
use crate::guard::AccessGuard;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::responses::StudentAssignment;
use crate::session::{Role, SessionStore};

// 当前视图的作业快照（按会话角色取其一）
#[derive(Debug, Clone)]
pub enum DirectorySnapshot {
    Empty,
    Admin(Vec<Assignment>),
    Student(Vec<StudentAssignment>),
}

impl DirectorySnapshot {
    pub fn len(&self) -> usize {
        match self {
            DirectorySnapshot::Empty => 0,
            DirectorySnapshot::Admin(list) => list.len(),
            DirectorySnapshot::Student(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug)]
struct DirectoryState {
    snapshot: DirectorySnapshot,
    // 上次刷新失败的可见错误指示（与加载中状态分开展示）
    last_error: Option<String>,
    refreshed_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self {
            snapshot: DirectorySnapshot::Empty,
            last_error: None,
            refreshed_at: None,
        }
    }
}

/// 同一目标的在途操作护栏：Drop 时释放忙标记
#[derive(Debug)]
pub struct TargetGuard {
    busy: Arc<DashMap<String, ()>>,
    key: String,
}

impl Drop for TargetGuard {
    fn drop(&mut self) {
        self.busy.remove(&self.key);
    }
}

/// 作业目录
pub struct AssignmentDirectory {
    api: Arc<dyn PortalApi>,
    guard: AccessGuard,
    sessions: Arc<SessionStore>,
    state: RwLock<DirectoryState>,
    // 每个作业一个忙标记：同一目标的第二个动作在途期间被拒绝
    busy: Arc<DashMap<String, ()>>,
    // 视图纪元：导航离开后迟到的结果据此被丢弃
    epoch: AtomicU64,
}

impl AssignmentDirectory {
    pub fn new(
        api: Arc<dyn PortalApi>,
        guard: AccessGuard,
        sessions: Arc<SessionStore>,
    ) -> Self {
        Self {
            api,
            guard,
            sessions,
            state: RwLock::new(DirectoryState::default()),
            busy: Arc::new(DashMap::new()),
            epoch: AtomicU64::new(0),
        }
    }

    /// 当前快照
    pub fn snapshot(&self) -> DirectorySnapshot {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.snapshot.clone()
    }

    /// 上次刷新的错误指示（成功刷新后清除）
    pub fn last_error(&self) -> Option<String> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.last_error.clone()
    }

    pub fn refreshed_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        state.refreshed_at
    }

    /// 视图失效（导航离开时调用）：在途刷新结果到达后直接丢弃
    pub fn invalidate_view(&self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
    }

    /// 占用某个作业的忙标记；已有在途操作时拒绝
    pub fn try_begin(&self, target: &str) -> Result<TargetGuard> {
        match self.busy.entry(target.to_string()) {
            Entry::Occupied(_) => Err(PortalError::conflict(
                "Another operation on this assignment is still in flight",
            )),
            Entry::Vacant(vacant) => {
                vacant.insert(());
                Ok(TargetGuard {
                    busy: Arc::clone(&self.busy),
                    key: target.to_string(),
                })
            }
        }
    }

    pub fn is_busy(&self, target: &str) -> bool {
        self.busy.contains_key(target)
    }

    /// 按当前会话角色全量刷新快照
    ///
    /// 失败时保留上一份快照，记录错误指示并向上传播；
    /// 认证类失败会清除会话，回到守卫的拒绝路径。
    pub async fn refresh(&self) -> Result<()> {
        let session = self
            .sessions
            .current()
            .ok_or_else(|| PortalError::authentication("unauthenticated"))?;
        let epoch = self.epoch.load(Ordering::SeqCst);

        let fetched = match session.role() {
            Role::Admin => self.api.list_all_assignments().await.map(DirectorySnapshot::Admin),
            Role::Student => self.api.list_assignments().await.map(DirectorySnapshot::Student),
        };

        match fetched {
            Ok(snapshot) => {
                if self.epoch.load(Ordering::SeqCst) != epoch {
                    // 视图已经切换，迟到的结果不再应用
                    debug!("Discarding stale directory refresh result");
                    return Ok(());
                }
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                debug!("Directory refreshed with {} assignment(s)", snapshot.len());
                state.snapshot = snapshot;
                state.last_error = None;
                state.refreshed_at = Some(chrono::Utc::now());
                Ok(())
            }
            Err(err) => {
                warn!("Directory refresh failed: {}", err);
                if err.is_authentication() {
                    self.guard.force_logout();
                }
                let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
                state.last_error = Some(err.format_simple());
                Err(err)
            }
        }
    }

    /// 管理员快照中的某份作业
    pub fn admin_assignment(&self, assignment_id: &str) -> Option<Assignment> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        match &state.snapshot {
            DirectorySnapshot::Admin(list) => {
                list.iter().find(|a| a.id == assignment_id).cloned()
            }
            _ => None,
        }
    }

    /// 学生快照中的某份作业
    pub fn student_assignment(&self, assignment_id: &str) -> Option<StudentAssignment> {
        let state = self.state.read().unwrap_or_else(|e| e.into_inner());
        match &state.snapshot {
            DirectorySnapshot::Student(list) => {
                list.iter().find(|a| a.id == assignment_id).cloned()
            }
            _ => None,
        }
    }
}
