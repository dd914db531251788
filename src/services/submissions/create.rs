use chrono::{DateTime, Utc};
use tracing::info;

use super::SubmissionService;
use crate::errors::{Result, StrideError};
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::submissions::requests::{CreateSubmissionRequest, SubmissionDraft};

/// 截止判定：晚于截止瞬间即迟交，无宽限期
pub fn classify(now: DateTime<Utc>, due_date: DateTime<Utc>) -> SubmissionStatus {
    if now > due_date {
        SubmissionStatus::Late
    } else {
        SubmissionStatus::OnTime
    }
}

pub async fn create_submission(
    service: &SubmissionService,
    data: CreateSubmissionRequest,
) -> Result<Submission> {
    // 1. 非空附件校验（先于任何存储变更）
    if data.files.is_empty() {
        return Err(StrideError::validation(
            "You must attach at least one file to submit this assignment",
        ));
    }

    // 2. 定位作业与提交学生。分组是否匹配不在此处校验：
    //    调用方只会用学生自己分组的作业发起提交。
    let assignment = service
        .store()
        .assignments()
        .into_iter()
        .find(|a| a.id == data.assignment_id)
        .ok_or_else(|| {
            StrideError::not_found(format!("Assignment {} does not exist", data.assignment_id))
        })?;
    let student = service
        .store()
        .users()
        .into_iter()
        .find(|u| u.id == data.student_id)
        .ok_or_else(|| {
            StrideError::not_found(format!("Student {} does not exist", data.student_id))
        })?;

    // 3. 以提交瞬间判定按时/迟交
    let now = Utc::now();
    let status = classify(now, assignment.due_date);

    let submission = service.store().add_submission(SubmissionDraft {
        assignment_id: assignment.id.clone(),
        student_id: student.id.clone(),
        student_name: student.name.clone(),
        files: data.files,
        text_response: data.text_response,
        submitted_at: Some(now),
        status: Some(status),
    });
    service.sync().persist_submissions(service.store());

    info!(
        "Submission {} recorded for assignment {} ({})",
        submission.id, assignment.id, submission.status
    );
    Ok(submission)
}
