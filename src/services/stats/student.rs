use crate::models::assignments::entities::Assignment;
use crate::models::submissions::entities::Submission;
use crate::models::users::entities::User;

/// 某学生对某作业的提交（按当前序列顺序取首个匹配）
pub fn submission_for<'a>(
    submissions: &'a [Submission],
    student_id: &str,
    assignment_id: &str,
) -> Option<&'a Submission> {
    submissions
        .iter()
        .find(|s| s.assignment_id == assignment_id && s.student_id == student_id)
}

/// 学生所在分组中尚未提交的作业
pub fn pending_for(
    student: &User,
    assignments: &[Assignment],
    submissions: &[Submission],
) -> Vec<Assignment> {
    assignments
        .iter()
        .filter(|a| a.section == student.section)
        .filter(|a| submission_for(submissions, &student.id, &a.id).is_none())
        .cloned()
        .collect()
}

/// 学生所在分组中已提交的作业
pub fn completed_for(
    student: &User,
    assignments: &[Assignment],
    submissions: &[Submission],
) -> Vec<Assignment> {
    assignments
        .iter()
        .filter(|a| a.section == student.section)
        .filter(|a| submission_for(submissions, &student.id, &a.id).is_some())
        .cloned()
        .collect()
}

/// 某作业的全部提交（保持存储顺序，最新在前）
pub fn submissions_for(submissions: &[Submission], assignment_id: &str) -> Vec<Submission> {
    submissions
        .iter()
        .filter(|s| s.assignment_id == assignment_id)
        .cloned()
        .collect()
}
