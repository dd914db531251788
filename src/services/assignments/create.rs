use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::info;

use super::AssignmentService;
use crate::errors::{Result, StrideError};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{AssignmentDraft, CreateAssignmentRequest};
use crate::models::users::entities::UserRole;

/// 解析客户端提交的截止时间
/// 接受 RFC 3339；datetime-local 的无时区形式按 UTC 处理
pub(crate) fn parse_due_date(raw: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))?;
    Ok(naive.and_utc())
}

pub async fn create_assignment(
    service: &AssignmentService,
    data: CreateAssignmentRequest,
) -> Result<Assignment> {
    // 1. 必填字段校验（先于任何存储变更）
    if data.title.trim().is_empty() {
        return Err(StrideError::validation("Assignment title is required"));
    }
    if data.due_date.trim().is_empty() {
        return Err(StrideError::validation("Due date is required"));
    }
    let due_date = parse_due_date(data.due_date.trim())?;

    // 2. 发布者必须是现存教师（仅创建时校验，之后不再复核）
    let users = service.store().users();
    let teacher = users
        .iter()
        .find(|u| u.id == data.teacher_id && u.role == UserRole::Teacher)
        .ok_or_else(|| {
            StrideError::validation("Assignments can only be published by an existing teacher")
        })?;

    // 3. 组装草稿：分组与科目缺省取自教师档案
    let draft = AssignmentDraft {
        title: data.title,
        description: data.description,
        due_date,
        section: data.section.or(Some(teacher.section)),
        teacher_id: teacher.id.clone(),
        teacher_name: teacher.name.clone(),
        subject: Some(
            teacher
                .subject
                .clone()
                .unwrap_or_else(|| "General".to_string()),
        ),
        attachments: data.attachments,
    };

    let assignment = service.store().add_assignment(draft);
    service.sync().persist_assignments(service.store());

    info!(
        "Assignment {} published by {} for {}",
        assignment.id, assignment.teacher_name, assignment.section
    );
    Ok(assignment)
}
