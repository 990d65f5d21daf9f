use study_core::model::Course;

use crate::vm::time_fmt::format_date;

/// A course as listed on the courses page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: u64,
    pub title: String,
    pub created_label: String,
}

impl From<&Course> for CourseCardVm {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id.value(),
            title: course.title.clone(),
            created_label: format_date(course.created_at),
        }
    }
}

#[must_use]
pub fn map_course_cards(courses: &[Course]) -> Vec<CourseCardVm> {
    courses.iter().map(CourseCardVm::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::{CourseId, UserId};
    use study_core::time::fixed_now;

    #[test]
    fn maps_id_title_and_date() {
        let course = Course {
            id: CourseId::new(4),
            title: "Data Mining".into(),
            created_at: fixed_now(),
            owner_id: UserId::new(1),
        };
        let cards = map_course_cards(&[course]);
        assert_eq!(
            cards,
            vec![CourseCardVm {
                id: 4,
                title: "Data Mining".into(),
                created_label: "2023-11-14".into(),
            }]
        );
    }
}
