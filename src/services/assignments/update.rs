use tracing::info;

use super::AssignmentService;
use super::create::parse_due_date;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::UpdateAssignmentRequest;

pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: &str,
    update_data: UpdateAssignmentRequest,
) -> Result<Option<Assignment>> {
    // 字段级合并；不存在的 ID 静默无操作（不回写）
    let updated = service.store().update_assignment(assignment_id, update_data);
    if let Some(assignment) = &updated {
        service.sync().persist_assignments(service.store());
        info!("Assignment {} updated", assignment.id);
    }
    Ok(updated)
}

pub async fn extend_deadline(
    service: &AssignmentService,
    assignment_id: &str,
    new_due_date: &str,
) -> Result<Option<Assignment>> {
    let due_date = parse_due_date(new_due_date.trim())?;
    update_assignment(
        service,
        assignment_id,
        UpdateAssignmentRequest {
            due_date: Some(due_date),
            ..Default::default()
        },
    )
    .await
}
