pub mod create;
pub mod delete;
pub mod update;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::{CreateAssignmentRequest, UpdateAssignmentRequest};
use crate::runtime::StateSync;
use crate::store::EntityStore;

pub struct AssignmentService {
    ctx: ServiceContext,
}

impl AssignmentService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    pub(crate) fn sync(&self) -> &StateSync {
        &self.ctx.sync
    }

    // 发布作业
    pub async fn create_assignment(&self, data: CreateAssignmentRequest) -> Result<Assignment> {
        create::create_assignment(self, data).await
    }

    // 取消作业（级联删除其提交）
    pub async fn delete_assignment(&self, assignment_id: &str) -> Result<()> {
        delete::delete_assignment(self, assignment_id).await
    }

    // 延长截止时间
    pub async fn extend_deadline(
        &self,
        assignment_id: &str,
        new_due_date: &str,
    ) -> Result<Option<Assignment>> {
        update::extend_deadline(self, assignment_id, new_due_date).await
    }

    // 字段级更新
    pub async fn update_assignment(
        &self,
        assignment_id: &str,
        update_data: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        update::update_assignment(self, assignment_id, update_data).await
    }
}
