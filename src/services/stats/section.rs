use crate::models::assignments::entities::Assignment;
use crate::models::stats::responses::SectionStats;
use crate::models::submissions::entities::{Submission, SubmissionStatus};
use crate::models::users::entities::{Section, User, UserRole};

/// 计算单个班级分组的提交统计
///
/// 提交的归属按其作业所在分组判定；期望量为 0 时完成率取 0。
pub fn section_stats(
    section: Section,
    users: &[User],
    assignments: &[Assignment],
    submissions: &[Submission],
) -> SectionStats {
    let section_assignments: Vec<&Assignment> =
        assignments.iter().filter(|a| a.section == section).collect();
    let section_submissions: Vec<&Submission> = submissions
        .iter()
        .filter(|s| {
            section_assignments
                .iter()
                .any(|a| a.id == s.assignment_id)
        })
        .collect();

    let student_count = users
        .iter()
        .filter(|u| u.role == UserRole::Student && u.section == section)
        .count();
    let expected = section_assignments.len() * student_count;

    let on_time = section_submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::OnTime)
        .count();
    let late = section_submissions
        .iter()
        .filter(|s| s.status == SubmissionStatus::Late)
        .count();
    let total = on_time + late;

    let rate = if expected > 0 {
        ((total as f64 / expected as f64) * 100.0).round() as u32
    } else {
        0
    };

    SectionStats {
        section,
        expected,
        on_time,
        late,
        total,
        rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn student(id: &str, section: Section) -> User {
        User {
            id: id.to_string(),
            username: format!("{id}_login"),
            password: "pw".to_string(),
            name: id.to_string(),
            role: UserRole::Student,
            section,
            subject: None,
        }
    }

    fn assignment(id: &str, section: Section) -> Assignment {
        Assignment {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            due_date: Utc::now(),
            section,
            teacher_id: "u-t1".to_string(),
            teacher_name: "Ada".to_string(),
            subject: "Physics".to_string(),
            attachments: vec![],
            created_at: Utc::now(),
        }
    }

    fn submission(assignment_id: &str, student_id: &str, status: SubmissionStatus) -> Submission {
        Submission {
            id: format!("s-{assignment_id}-{student_id}"),
            assignment_id: assignment_id.to_string(),
            student_id: student_id.to_string(),
            student_name: student_id.to_string(),
            submitted_at: Utc::now(),
            files: vec![],
            text_response: None,
            status,
        }
    }

    #[test]
    fn test_zero_assignments_guards_divide_by_zero() {
        let users = vec![student("u-1", Section::EinsteinG11)];
        // 有一条游离提交指向不存在的作业，也不会影响该分组
        let submissions = vec![submission("a-ghost", "u-1", SubmissionStatus::OnTime)];

        let stats = section_stats(Section::EinsteinG11, &users, &[], &submissions);
        assert_eq!(stats.expected, 0);
        assert_eq!(stats.rate, 0);
        assert_eq!(stats.total, 0);
    }

    #[test]
    fn test_rate_rounds_to_nearest_percent() {
        let users = vec![
            student("u-1", Section::EinsteinG11),
            student("u-2", Section::EinsteinG11),
            student("u-3", Section::EinsteinG11),
        ];
        let assignments = vec![assignment("a-1", Section::EinsteinG11)];
        let submissions = vec![
            submission("a-1", "u-1", SubmissionStatus::OnTime),
            submission("a-1", "u-2", SubmissionStatus::Late),
        ];

        let stats = section_stats(Section::EinsteinG11, &users, &assignments, &submissions);
        assert_eq!(stats.expected, 3);
        assert_eq!(stats.on_time, 1);
        assert_eq!(stats.late, 1);
        // 2/3 = 66.67% → 67
        assert_eq!(stats.rate, 67);
    }

    #[test]
    fn test_other_sections_are_excluded() {
        let users = vec![
            student("u-1", Section::EinsteinG11),
            student("u-2", Section::GalileiG12),
        ];
        let assignments = vec![
            assignment("a-e", Section::EinsteinG11),
            assignment("a-g", Section::GalileiG12),
        ];
        let submissions = vec![
            submission("a-e", "u-1", SubmissionStatus::OnTime),
            submission("a-g", "u-2", SubmissionStatus::Late),
        ];

        let stats = section_stats(Section::EinsteinG11, &users, &assignments, &submissions);
        assert_eq!(stats.expected, 1);
        assert_eq!(stats.on_time, 1);
        assert_eq!(stats.late, 0);
        assert_eq!(stats.rate, 100);
    }

    #[test]
    fn test_volume_rate_double_counts_multi_submitters() {
        // 一个学生向两份作业各提交一次：期望量 2，提交量 2，完成率 100
        let users = vec![student("u-1", Section::GalileiG12)];
        let assignments = vec![
            assignment("a-1", Section::GalileiG12),
            assignment("a-2", Section::GalileiG12),
        ];
        let submissions = vec![
            submission("a-1", "u-1", SubmissionStatus::OnTime),
            submission("a-2", "u-1", SubmissionStatus::OnTime),
        ];

        let stats = section_stats(Section::GalileiG12, &users, &assignments, &submissions);
        assert_eq!(stats.expected, 2);
        assert_eq!(stats.total, 2);
        assert_eq!(stats.rate, 100);
    }

    #[test]
    fn test_recomputation_is_idempotent() {
        let users = vec![student("u-1", Section::EinsteinG11)];
        let assignments = vec![assignment("a-1", Section::EinsteinG11)];
        let submissions = vec![submission("a-1", "u-1", SubmissionStatus::Late)];

        let first = section_stats(Section::EinsteinG11, &users, &assignments, &submissions);
        let second = section_stats(Section::EinsteinG11, &users, &assignments, &submissions);
        assert_eq!(first, second);
    }
}
