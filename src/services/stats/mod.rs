//! 派生视图引擎
//!
//! 全部为无状态纯函数：每次调用基于当前快照重算，不做增量缓存。
//! 集合规模小、变更频率低，重算成本可以接受。

pub mod section;
pub mod student;

use super::ServiceContext;
use crate::models::assignments::entities::Assignment;
use crate::models::stats::responses::SectionStats;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::{Section, User};
use crate::store::EntityStore;

pub struct StatsService {
    ctx: ServiceContext,
}

impl StatsService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    // 班级分组统计
    pub fn section_stats(&self, section: Section) -> SectionStats {
        section::section_stats(
            section,
            &self.store().users(),
            &self.store().assignments(),
            &self.store().submissions(),
        )
    }

    // 学生待完成的作业
    pub fn pending_for(&self, student: &User) -> Vec<Assignment> {
        student::pending_for(
            student,
            &self.store().assignments(),
            &self.store().submissions(),
        )
    }

    // 学生已完成的作业
    pub fn completed_for(&self, student: &User) -> Vec<Assignment> {
        student::completed_for(
            student,
            &self.store().assignments(),
            &self.store().submissions(),
        )
    }

    // 某学生对某作业的提交
    pub fn submission_for(&self, student_id: &str, assignment_id: &str) -> Option<Submission> {
        student::submission_for(&self.store().submissions(), student_id, assignment_id).cloned()
    }

    // 某作业的全部提交
    pub fn submissions_for(&self, assignment_id: &str) -> Vec<Submission> {
        student::submissions_for(&self.store().submissions(), assignment_id)
    }
}
