use crate::constants::DURATION_PLACEHOLDER;
use crate::models::EnrolledCourse;

/// One line of the enrolled-courses table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRow {
    pub name: String,
    pub duration: String,
    pub progress: String,
}

/// Whole-number percentage in 0..=100; missing or NaN shows as 0
pub fn progress_percent(progress: Option<f64>) -> u8 {
    match progress {
        Some(p) if p.is_finite() => p.round().clamp(0.0, 100.0) as u8,
        _ => 0,
    }
}

pub fn course_row(course: &EnrolledCourse) -> CourseRow {
    let duration = course
        .total_duration
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or(DURATION_PLACEHOLDER)
        .to_string();

    CourseRow {
        name: course.course_name.clone(),
        duration,
        progress: format!("{}%", progress_percent(course.progress_percentage)),
    }
}

/// Plain-text table, or the empty-state line
pub fn render_courses(courses: &[EnrolledCourse]) -> String {
    if courses.is_empty() {
        return "No courses enrolled yet".to_string();
    }

    let rows: Vec<CourseRow> = courses.iter().map(course_row).collect();
    let name_width = rows
        .iter()
        .map(|r| r.name.chars().count())
        .chain(std::iter::once("Course Name".len()))
        .max()
        .unwrap_or(0);
    let duration_width = rows
        .iter()
        .map(|r| r.duration.chars().count())
        .chain(std::iter::once("Duration".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!(
        "{:<nw$}  {:<dw$}  {}\n",
        "Course Name",
        "Duration",
        "Progress",
        nw = name_width,
        dw = duration_width
    );
    for row in &rows {
        out.push_str(&format!(
            "{:<nw$}  {:<dw$}  {}\n",
            row.name,
            row.duration,
            row.progress,
            nw = name_width,
            dw = duration_width
        ));
    }
    out
}
