pub mod create;

use super::ServiceContext;
use crate::errors::Result;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::runtime::StateSync;
use crate::store::EntityStore;

pub struct SubmissionService {
    ctx: ServiceContext,
}

impl SubmissionService {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) fn store(&self) -> &EntityStore {
        &self.ctx.store
    }

    pub(crate) fn sync(&self) -> &StateSync {
        &self.ctx.sync
    }

    // 学生提交作业
    pub async fn create_submission(&self, data: CreateSubmissionRequest) -> Result<Submission> {
        create::create_submission(self, data).await
    }
}
