// Gateway module for views - follows the Train Station Pattern
// Views only turn state into text; they hold no logic of their own

mod alert;
mod cart;
mod courses;
mod profile;

pub use alert::{Alert, AlertLevel};
pub use cart::{format_price, render_cart};
pub use courses::{course_row, progress_percent, render_courses, CourseRow};
pub use profile::{detail_rows, initials, render_profile};
