use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 附件文件实体
//
// 一旦挂接到作业或提交上即不可变，由所属实体独占，不按 ID 共享。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/file.ts")]
pub struct SubmissionFile {
    // 文件名称
    pub name: String,
    // MIME 类型
    pub mime_type: String,
    // data URL 编码的文件内容（data:<mime>;base64,<payload>），长度不限
    pub data: String,
}
