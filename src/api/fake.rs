//! 测试用内存假实现
//!
//! 以单个学生（s1 / Asha）的视角维护管理员与学生两种形状的作业集合，
//! 提交 / 评分会同时更新两边，便于工作流测试断言派生状态。

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::PortalApi;
use crate::errors::{PortalError, Result};
use crate::models::assignments::entities::{Assignment, Submission, SubmissionStudent};
use crate::models::assignments::requests::{AssignmentPayload, GradeRequest};
use crate::models::assignments::responses::StudentAssignment;
use crate::models::auth::{
    AdminLoginRequest, AdminLoginResponse, RegisterRequest, RegisterResponse, StudentLoginRequest,
    StudentLoginResponse,
};
use crate::models::files::entities::SubmissionFile;
use crate::models::notices::{Notice, NoticePayload};
use crate::models::students::entities::{Student, StudentYear};
use crate::models::students::requests::{CreateStudentRequest, UpdateStudentRequest};

pub const FAKE_STUDENT_ID: &str = "s1";

type ListHook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
pub struct FakePortal {
    admin_assignments: Mutex<Vec<Assignment>>,
    student_assignments: Mutex<Vec<StudentAssignment>>,
    submit_calls: AtomicUsize,
    grade_calls: AtomicUsize,
    fail_listings: AtomicBool,
    fail_with_auth: AtomicBool,
    list_hook: Mutex<Option<ListHook>>,
}

impl FakePortal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed_student_assignment(&self, id: &str, due_date: DateTime<Utc>) {
        let mut list = self.student_assignments.lock().expect("lock");
        list.push(StudentAssignment {
            id: id.to_string(),
            title: format!("Assignment {id}"),
            description: "Seeded for tests".to_string(),
            due_date,
            target_year: StudentYear::Second,
            submitted: false,
            file_name: None,
            grade: None,
            feedback: None,
            created_at: Some(Utc::now()),
        });
    }

    pub fn seed_admin_assignment(&self, id: &str, due_date: DateTime<Utc>) {
        let mut list = self.admin_assignments.lock().expect("lock");
        list.push(Assignment {
            id: id.to_string(),
            title: format!("Assignment {id}"),
            description: "Seeded for tests".to_string(),
            due_date,
            target_year: StudentYear::Second,
            submissions: Vec::new(),
            created_at: Some(Utc::now()),
        });
    }

    pub fn seed_submission(&self, assignment_id: &str, grade: Option<i32>) {
        let mut list = self.admin_assignments.lock().expect("lock");
        let assignment = list
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .expect("assignment seeded");
        assignment.submissions.push(Submission {
            id: format!("sub-{assignment_id}"),
            student: SubmissionStudent {
                id: FAKE_STUDENT_ID.to_string(),
                name: "Asha".to_string(),
            },
            file_name: Some("stored.pdf".to_string()),
            original_name: Some("essay.pdf".to_string()),
            submitted_at: Some(Utc::now()),
            grade,
            feedback: grade.map(|_| "seeded".to_string()),
        });
    }

    pub fn fail_listings(&self, fail: bool) {
        self.fail_listings.store(fail, Ordering::SeqCst);
    }

    pub fn fail_with_auth(&self, fail: bool) {
        self.fail_with_auth.store(fail, Ordering::SeqCst);
    }

    pub fn set_list_hook(&self, hook: impl FnOnce() + Send + 'static) {
        *self.list_hook.lock().expect("lock") = Some(Box::new(hook));
    }

    pub fn submit_count(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn grade_count(&self) -> usize {
        self.grade_calls.load(Ordering::SeqCst)
    }

    pub fn submissions_for(&self, assignment_id: &str) -> Vec<Submission> {
        let list = self.admin_assignments.lock().expect("lock");
        list.iter()
            .find(|a| a.id == assignment_id)
            .map(|a| a.submissions.clone())
            .unwrap_or_default()
    }

    fn run_list_hook(&self) {
        if let Some(hook) = self.list_hook.lock().expect("lock").take() {
            hook();
        }
    }

    fn listing_error(&self) -> Option<PortalError> {
        if self.fail_with_auth.load(Ordering::SeqCst) {
            return Some(PortalError::authentication("Invalid token"));
        }
        if self.fail_listings.load(Ordering::SeqCst) {
            return Some(PortalError::transport("connection refused"));
        }
        None
    }
}

#[async_trait]
impl PortalApi for FakePortal {
    async fn student_login(&self, _request: StudentLoginRequest) -> Result<StudentLoginResponse> {
        Err(PortalError::transport("login is not wired in the fake"))
    }

    async fn admin_login(&self, _request: AdminLoginRequest) -> Result<AdminLoginResponse> {
        Err(PortalError::transport("login is not wired in the fake"))
    }

    async fn register_student(&self, _request: RegisterRequest) -> Result<RegisterResponse> {
        Err(PortalError::transport("register is not wired in the fake"))
    }

    async fn student_profile(&self) -> Result<Student> {
        Ok(Student {
            id: FAKE_STUDENT_ID.to_string(),
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            year: StudentYear::Second,
        })
    }

    async fn list_assignments(&self) -> Result<Vec<StudentAssignment>> {
        self.run_list_hook();
        if let Some(err) = self.listing_error() {
            return Err(err);
        }
        Ok(self.student_assignments.lock().expect("lock").clone())
    }

    async fn list_all_assignments(&self) -> Result<Vec<Assignment>> {
        self.run_list_hook();
        if let Some(err) = self.listing_error() {
            return Err(err);
        }
        Ok(self.admin_assignments.lock().expect("lock").clone())
    }

    async fn create_assignment(&self, payload: AssignmentPayload) -> Result<()> {
        let mut list = self.admin_assignments.lock().expect("lock");
        let id = format!("a{}", list.len() + 1);
        list.push(Assignment {
            id,
            title: payload.title,
            description: payload.description,
            due_date: payload.due_date,
            target_year: payload.target_year,
            submissions: Vec::new(),
            created_at: Some(Utc::now()),
        });
        Ok(())
    }

    async fn update_assignment(
        &self,
        assignment_id: &str,
        payload: AssignmentPayload,
    ) -> Result<()> {
        let mut list = self.admin_assignments.lock().expect("lock");
        let assignment = list
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
        assignment.title = payload.title;
        assignment.description = payload.description;
        assignment.due_date = payload.due_date;
        assignment.target_year = payload.target_year;
        Ok(())
    }

    async fn delete_assignment(&self, assignment_id: &str) -> Result<()> {
        let mut list = self.admin_assignments.lock().expect("lock");
        let before = list.len();
        list.retain(|a| a.id != assignment_id);
        if list.len() == before {
            return Err(PortalError::not_found("Assignment not found"));
        }
        Ok(())
    }

    async fn submit_assignment(&self, assignment_id: &str, file: SubmissionFile) -> Result<()> {
        if self.fail_with_auth.load(Ordering::SeqCst) {
            return Err(PortalError::authentication("Invalid token"));
        }
        self.submit_calls.fetch_add(1, Ordering::SeqCst);

        {
            let mut student_list = self.student_assignments.lock().expect("lock");
            let view = student_list
                .iter_mut()
                .find(|a| a.id == assignment_id)
                .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
            if view.submitted {
                return Err(PortalError::conflict("Assignment already submitted"));
            }
            view.submitted = true;
            view.file_name = Some(file.file_name.clone());
        }

        let mut admin_list = self.admin_assignments.lock().expect("lock");
        if let Some(assignment) = admin_list.iter_mut().find(|a| a.id == assignment_id) {
            assignment.submissions.push(Submission {
                id: format!("sub-{assignment_id}"),
                student: SubmissionStudent {
                    id: FAKE_STUDENT_ID.to_string(),
                    name: "Asha".to_string(),
                },
                file_name: Some(file.file_name.clone()),
                original_name: Some(file.file_name),
                submitted_at: Some(Utc::now()),
                grade: None,
                feedback: None,
            });
        }
        Ok(())
    }

    async fn grade_submission(
        &self,
        assignment_id: &str,
        submission_id: &str,
        request: GradeRequest,
    ) -> Result<()> {
        self.grade_calls.fetch_add(1, Ordering::SeqCst);

        let mut admin_list = self.admin_assignments.lock().expect("lock");
        let assignment = admin_list
            .iter_mut()
            .find(|a| a.id == assignment_id)
            .ok_or_else(|| PortalError::not_found("Assignment not found"))?;
        let submission = assignment
            .submissions
            .iter_mut()
            .find(|sub| sub.id == submission_id)
            .ok_or_else(|| PortalError::not_found("Submission not found"))?;
        submission.grade = Some(request.grade);
        submission.feedback = Some(request.feedback.clone());

        let mut student_list = self.student_assignments.lock().expect("lock");
        if let Some(view) = student_list.iter_mut().find(|a| a.id == assignment_id) {
            view.grade = Some(request.grade);
            view.feedback = Some(request.feedback);
        }
        Ok(())
    }

    async fn download_submission(&self, _assignment_id: &str, _file_name: &str) -> Result<Vec<u8>> {
        Ok(b"%PDF-1.4 fake".to_vec())
    }

    async fn list_notices(&self) -> Result<Vec<Notice>> {
        Ok(Vec::new())
    }

    async fn create_notice(&self, _payload: NoticePayload) -> Result<()> {
        Ok(())
    }

    async fn update_notice(&self, _notice_id: &str, _payload: NoticePayload) -> Result<()> {
        Ok(())
    }

    async fn delete_notice(&self, _notice_id: &str) -> Result<()> {
        Ok(())
    }

    async fn list_students(&self) -> Result<Vec<Student>> {
        Ok(Vec::new())
    }

    async fn create_student(&self, _request: CreateStudentRequest) -> Result<()> {
        Ok(())
    }

    async fn update_student(&self, _student_id: &str, _request: UpdateStudentRequest) -> Result<()> {
        Ok(())
    }

    async fn delete_student(&self, _student_id: &str) -> Result<()> {
        Ok(())
    }
}
