use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::users::entities::Section;

/// 班级分组统计
///
/// rate 为提交量完成率百分比：期望量按「分组作业数 × 分组学生数」计算，
/// 同一学生对多份作业的提交分别计入，衡量提交总量而非按人完成度。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/stats.ts")]
pub struct SectionStats {
    pub section: Section,
    // 期望提交量 = 分组作业数 × 分组学生数
    pub expected: usize,
    // 按时提交量
    pub on_time: usize,
    // 迟交量
    pub late: usize,
    // 实际提交量 = on_time + late
    pub total: usize,
    // round(100 * total / expected)，expected 为 0 时取 0
    pub rate: u32,
}
