use tracing::info;

use super::AssignmentService;
use crate::errors::Result;

pub async fn delete_assignment(service: &AssignmentService, assignment_id: &str) -> Result<()> {
    // 作业与其提交在存储层同一写锁内一起移除；
    // 两个集合随后各自回写，之间没有事务性，短暂不一致由下一次整体回写自愈。
    if service.store().delete_assignment(assignment_id) {
        service.sync().persist_assignments(service.store());
        service.sync().persist_submissions(service.store());
        info!(
            "Assignment {} and its submissions deleted",
            assignment_id
        );
    }
    Ok(())
}
