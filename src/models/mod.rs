// Gateway module for models - follows the Train Station Pattern
// All external access must go through this gateway

mod forms;
mod types;

pub use forms::{LoginForm, OtpRequest, ProfileUpdate, SignUpForm};
pub use types::{AccountType, AdditionalDetails, CartItem, EnrolledCourse, UserProfile};
