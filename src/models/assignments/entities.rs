use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::entities::SubmissionFile;
use crate::models::users::entities::Section;

// 作业实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: String,
    // 截止时间
    pub due_date: chrono::DateTime<chrono::Utc>,
    // 所属班级分组
    pub section: Section,
    // 发布教师 ID
    pub teacher_id: String,
    // 发布教师姓名（冗余字段，教师删除后仍保留）
    pub teacher_name: String,
    // 科目
    pub subject: String,
    // 作业附件
    pub attachments: Vec<SubmissionFile>,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
