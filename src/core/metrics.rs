use crate::domain::model::{Attendance, Grade, STATUS_ABSENT, STATUS_PRESENT};

/// Counts and rate derived from a sequence of attendance records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub absent: usize,
    /// round(100 * present / total); 0 when there are no records.
    pub percentage: u32,
}

pub fn attendance_stats(records: &[Attendance]) -> AttendanceStats {
    let total = records.len();
    let present = records.iter().filter(|r| r.status == STATUS_PRESENT).count();
    let absent = records.iter().filter(|r| r.status == STATUS_ABSENT).count();

    AttendanceStats {
        total,
        present,
        absent,
        percentage: percentage(present, total),
    }
}

pub fn percentage(present: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (present as f64 / total as f64 * 100.0).round() as u32
}

/// Fixed letter-to-point mapping; letters outside the scale count as 0.0.
pub fn grade_points(letter: &str) -> f64 {
    match letter {
        "A+" | "A" => 4.0,
        "A-" => 3.7,
        "B+" => 3.3,
        "B" => 3.0,
        "B-" => 2.7,
        "C+" => 2.3,
        "C" => 2.0,
        "C-" => 1.7,
        "D+" => 1.3,
        "D" => 1.0,
        "F" => 0.0,
        _ => 0.0,
    }
}

/// Mean of the mapped grade points; 0 when there are no grades.
pub fn gpa(grades: &[Grade]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }
    let total: f64 = grades.iter().map(|g| grade_points(&g.grade)).sum();
    total / grades.len() as f64
}

pub fn format_gpa(value: f64) -> String {
    format!("{:.2}", value)
}
