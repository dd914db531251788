//! 内存实体存储
//!
//! 进程内的唯一事实来源：用户、作业、提交三个集合加当前会话用户。
//! 变更操作同步生效且互不交错（内部单写锁）；读取一律返回克隆快照。
//! 本层只做缺省值补全，不做业务校验；水合与回写由 runtime 层负责。

use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{AssignmentDraft, UpdateAssignmentRequest};
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::SubmissionDraft;
use crate::models::users::entities::User;
use crate::models::users::requests::{CreateUserRequest, UpdateUserRequest};

/// 生成带实体前缀的不透明唯一 ID
fn next_id(prefix: &str) -> String {
    format!("{prefix}-{}", Uuid::new_v4())
}

#[derive(Debug, Default)]
struct StoreState {
    session_user: Option<User>,
    users: Vec<User>,
    assignments: Vec<Assignment>,
    submissions: Vec<Submission>,
}

#[derive(Debug, Default)]
pub struct EntityStore {
    state: RwLock<StoreState>,
}

impl EntityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 以缺省数据创建（水合前的初始状态）
    pub fn with_defaults(
        users: Vec<User>,
        assignments: Vec<Assignment>,
        submissions: Vec<Submission>,
    ) -> Self {
        Self {
            state: RwLock::new(StoreState {
                session_user: None,
                users,
                assignments,
                submissions,
            }),
        }
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState> {
        self.state.read().expect("Entity store lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreState> {
        self.state.write().expect("Entity store lock poisoned")
    }

    // ---- 读取快照 ----

    pub fn users(&self) -> Vec<User> {
        self.read().users.clone()
    }

    pub fn assignments(&self) -> Vec<Assignment> {
        self.read().assignments.clone()
    }

    pub fn submissions(&self) -> Vec<Submission> {
        self.read().submissions.clone()
    }

    /// 当前会话用户（副本，不是活引用）
    pub fn session_user(&self) -> Option<User> {
        self.read().session_user.clone()
    }

    pub fn set_session_user(&self, user: Option<User>) {
        self.write().session_user = user;
    }

    // ---- 水合接缝：整体替换单个集合 ----

    pub fn replace_users(&self, users: Vec<User>) {
        self.write().users = users;
    }

    pub fn replace_assignments(&self, assignments: Vec<Assignment>) {
        self.write().assignments = assignments;
    }

    pub fn replace_submissions(&self, submissions: Vec<Submission>) {
        self.write().submissions = submissions;
    }

    // ---- 用户 ----

    /// 创建用户：生成 ID、补全缺省字段，追加到序列末尾
    pub fn add_user(&self, req: CreateUserRequest) -> User {
        let user = User {
            id: next_id("u"),
            username: req.username.unwrap_or_default(),
            password: req.password,
            name: req.name,
            role: req.role.unwrap_or_default(),
            section: req.section.unwrap_or_default(),
            subject: req.subject,
        };
        self.write().users.push(user.clone());
        user
    }

    /// 删除用户：仅移除该 ID；不存在时静默无操作。
    /// 不级联作业与提交，冗余姓名字段保留。
    pub fn delete_user(&self, id: &str) -> bool {
        let mut state = self.write();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        state.users.len() != before
    }

    /// 更新用户：字段级合并；不存在时静默无操作
    pub fn update_user(&self, id: &str, update: UpdateUserRequest) -> Option<User> {
        let mut state = self.write();
        let user = state.users.iter_mut().find(|u| u.id == id)?;
        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(username) = update.username {
            user.username = username;
        }
        if let Some(password) = update.password {
            user.password = password;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(section) = update.section {
            user.section = section;
        }
        if let Some(subject) = update.subject {
            user.subject = Some(subject);
        }
        Some(user.clone())
    }

    // ---- 作业 ----

    /// 创建作业：生成 ID 与创建时间，补全缺省字段，插入到序列头部（最新在前）
    pub fn add_assignment(&self, draft: AssignmentDraft) -> Assignment {
        let assignment = Assignment {
            id: next_id("a"),
            title: draft.title,
            description: draft.description.unwrap_or_default(),
            due_date: draft.due_date,
            section: draft.section.unwrap_or_default(),
            teacher_id: draft.teacher_id,
            teacher_name: draft.teacher_name,
            subject: draft.subject.unwrap_or_default(),
            attachments: draft.attachments.unwrap_or_default(),
            created_at: Utc::now(),
        };
        self.write().assignments.insert(0, assignment.clone());
        assignment
    }

    /// 删除作业并级联删除其全部提交（同一写锁内完成，对调用方原子）。
    /// 不存在时静默无操作，提交集合不受影响。
    pub fn delete_assignment(&self, id: &str) -> bool {
        let mut state = self.write();
        let before = state.assignments.len();
        state.assignments.retain(|a| a.id != id);
        if state.assignments.len() == before {
            return false;
        }
        state.submissions.retain(|s| s.assignment_id != id);
        true
    }

    /// 更新作业：字段级合并；不存在时静默无操作
    pub fn update_assignment(
        &self,
        id: &str,
        update: UpdateAssignmentRequest,
    ) -> Option<Assignment> {
        let mut state = self.write();
        let assignment = state.assignments.iter_mut().find(|a| a.id == id)?;
        if let Some(title) = update.title {
            assignment.title = title;
        }
        if let Some(description) = update.description {
            assignment.description = description;
        }
        if let Some(due_date) = update.due_date {
            assignment.due_date = due_date;
        }
        if let Some(section) = update.section {
            assignment.section = section;
        }
        if let Some(subject) = update.subject {
            assignment.subject = subject;
        }
        if let Some(attachments) = update.attachments {
            assignment.attachments = attachments;
        }
        Some(assignment.clone())
    }

    // ---- 提交 ----

    /// 创建提交：生成 ID，补全缺省字段，插入到序列头部（最新在前）。
    /// 非空附件等业务校验由调用方负责，本层不拒绝任何草稿。
    pub fn add_submission(&self, draft: SubmissionDraft) -> Submission {
        let submission = Submission {
            id: next_id("s"),
            assignment_id: draft.assignment_id,
            student_id: draft.student_id,
            student_name: draft.student_name,
            submitted_at: draft.submitted_at.unwrap_or_else(Utc::now),
            files: draft.files,
            text_response: draft.text_response,
            status: draft.status.unwrap_or_default(),
        };
        self.write().submissions.insert(0, submission.clone());
        submission
    }
}
