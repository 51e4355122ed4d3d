use crate::domain::model::Attendance;

/// User-driven filter over aggregated attendance records. Criteria AND
/// together; an unset criterion matches everything.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    /// Case-insensitive substring match on student name or course name.
    pub search: Option<String>,
    /// Exact, case-sensitive status equality ("present" != "Present").
    pub status: Option<String>,
    pub student_id: Option<i64>,
    pub course_id: Option<i64>,
}

impl AttendanceFilter {
    pub fn matches(&self, record: &Attendance) -> bool {
        let term = self.lowered_term();
        self.matches_lowered(record, term.as_deref())
    }

    /// Returns the matching records as a new collection; the input is
    /// never mutated. The search term is lowercased once per
    /// application, not once per record.
    pub fn apply(&self, records: &[Attendance]) -> Vec<Attendance> {
        let term = self.lowered_term();
        records
            .iter()
            .filter(|r| self.matches_lowered(r, term.as_deref()))
            .cloned()
            .collect()
    }

    fn lowered_term(&self) -> Option<String> {
        self.search.as_ref().map(|t| t.to_lowercase())
    }

    fn matches_lowered(&self, record: &Attendance, term: Option<&str>) -> bool {
        let matches_search = match term {
            Some(term) => {
                record.student_name.to_lowercase().contains(term)
                    || record.course_name.to_lowercase().contains(term)
            }
            None => true,
        };
        let matches_status = match &self.status {
            Some(status) => record.status == *status,
            None => true,
        };
        let matches_student = self
            .student_id
            .map_or(true, |id| record.student_id == id);
        let matches_course = self.course_id.map_or(true, |id| record.course_id == id);

        matches_search && matches_status && matches_student && matches_course
    }
}
