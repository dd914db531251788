use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::entities::SubmissionFile;
use crate::models::users::entities::Section;

// 作业创建请求（来自客户端表单）
//
// due_date 接受 RFC 3339 或客户端 datetime-local 的无时区形式，
// 由业务层解析校验后转为存储层草稿。
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    pub due_date: String,
    pub teacher_id: String,
    pub section: Option<Section>,
    pub attachments: Option<Vec<SubmissionFile>>,
}

// 作业草稿（用于存储层，缺省字段由存储层补全）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDraft {
    pub title: String,
    pub description: Option<String>,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub section: Option<Section>,
    pub teacher_id: String,
    pub teacher_name: String,
    pub subject: Option<String>,
    pub attachments: Option<Vec<SubmissionFile>>,
}

// 作业更新请求（字段级合并，目前用于延长截止时间）
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub section: Option<Section>,
    pub subject: Option<String>,
    pub attachments: Option<Vec<SubmissionFile>>,
}
