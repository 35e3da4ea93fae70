//! 作业状态引擎
//!
//! 从 (是否已提交, 是否已评分, 截止时间 vs 当前时间) 派生状态标签。
//! 纯函数，无 I/O，无副作用；管理员视图与学生视图共用同一分类器，
//! 避免两处各算一套产生漂移。

use chrono::{DateTime, Utc};

use crate::models::assignments::entities::{Assignment, AssignmentStatus, Submission};
use crate::models::assignments::responses::StudentAssignment;

/// 状态分类核心（规则按序求值，首个命中生效）
///
/// 1. 未提交且已过截止时间 -> Overdue
/// 2. 未提交且未过截止时间 -> Pending（now == due 不算逾期）
/// 3. 已提交未评分 -> Submitted
/// 4. 已提交已评分 -> Graded（与截止时间无关）
fn classify(
    submitted: bool,
    graded: bool,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AssignmentStatus {
    if !submitted {
        if now > due_date {
            AssignmentStatus::Overdue
        } else {
            AssignmentStatus::Pending
        }
    } else if graded {
        AssignmentStatus::Graded
    } else {
        AssignmentStatus::Submitted
    }
}

/// 按提交记录派生状态（管理员视图形状）
pub fn derive_status(
    submission: Option<&Submission>,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> AssignmentStatus {
    classify(
        submission.is_some(),
        submission.is_some_and(|sub| sub.grade.is_some()),
        due_date,
        now,
    )
}

/// 是否允许进入提交工作流：未提交且未过截止时间
pub fn can_submit(
    submission: Option<&Submission>,
    due_date: DateTime<Utc>,
    now: DateTime<Utc>,
) -> bool {
    submission.is_none() && now <= due_date
}

impl Assignment {
    /// 某学生视角下这份作业的派生状态
    pub fn status_for(&self, student_id: &str, now: DateTime<Utc>) -> AssignmentStatus {
        derive_status(self.submission_for(student_id), self.due_date, now)
    }
}

impl StudentAssignment {
    /// 学生视图形状（提交信息已被服务端拍平）下的派生状态
    pub fn status(&self, now: DateTime<Utc>) -> AssignmentStatus {
        classify(self.submitted, self.grade.is_some(), self.due_date, now)
    }

    pub fn can_submit(&self, now: DateTime<Utc>) -> bool {
        !self.submitted && now <= self.due_date
    }
}
