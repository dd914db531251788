use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::SubmissionStatus;
use crate::models::files::entities::SubmissionFile;

// 提交创建请求（来自学生端表单）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub assignment_id: String,
    pub student_id: String,
    pub files: Vec<SubmissionFile>,
    pub text_response: Option<String>,
}

// 提交草稿（用于存储层，缺省字段由存储层补全）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionDraft {
    pub assignment_id: String,
    pub student_id: String,
    pub student_name: String,
    pub files: Vec<SubmissionFile>,
    pub text_response: Option<String>,
    // 未指定时取当前时间
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    // 未指定时默认按时
    pub status: Option<SubmissionStatus>,
}
