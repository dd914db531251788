use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::files::entities::SubmissionFile;

// 提交状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    OnTime, // 按时提交
    Late,   // 迟交
}

impl SubmissionStatus {
    pub const ON_TIME: &'static str = "ON_TIME";
    pub const LATE: &'static str = "LATE";
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::OnTime
    }
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::ON_TIME => Ok(SubmissionStatus::OnTime),
            SubmissionStatus::LATE => Ok(SubmissionStatus::Late),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: ON_TIME, LATE"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::OnTime => write!(f, "{}", SubmissionStatus::ON_TIME),
            SubmissionStatus::Late => write!(f, "{}", SubmissionStatus::LATE),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ON_TIME" => Ok(SubmissionStatus::OnTime),
            "LATE" => Ok(SubmissionStatus::Late),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: String,
    // 关联的作业 ID
    pub assignment_id: String,
    // 提交学生 ID
    pub student_id: String,
    // 提交学生姓名（冗余字段，学生删除后仍保留）
    pub student_name: String,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 附件文件（业务层保证非空）
    pub files: Vec<SubmissionFile>,
    // 可选的文字作答
    pub text_response: Option<String>,
    // 按时/迟交状态（入库时根据截止时间判定）
    pub status: SubmissionStatus,
}
