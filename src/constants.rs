/// Constants module to avoid magic strings in the codebase

// Network Configuration
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000/api/v1";

// API paths (relative to the base URL)
pub const AUTH_LOGIN_PATH: &str = "/auth/login";
pub const AUTH_SEND_OTP_PATH: &str = "/auth/sendotp";
pub const AUTH_SIGN_UP_PATH: &str = "/auth/signUp";
pub const PROFILE_DETAILS_PATH: &str = "/profile/getUserDetails";
pub const PROFILE_UPDATE_PATH: &str = "/profile/updateProfile";
pub const ENROLLED_COURSES_PATH: &str = "/profile/getEnrolledCourses";

// Local storage
pub const TOKEN_KEY: &str = "auth_token";
pub const STORAGE_FILE_NAME: &str = "storage.json";
pub const APP_NAME: &str = "studyhub";
pub const ENV_PREFIX: &str = "STUDYHUB_";

// Signups from this client are always students
pub const SIGN_UP_ACCOUNT_TYPE: &str = "Student";

// Display placeholders
pub const FIELD_PLACEHOLDER: &str = "N/A";
pub const DURATION_PLACEHOLDER: &str = "N/A";
pub const BIO_PLACEHOLDER: &str = "Write something about yourself";
pub const GENDER_PLACEHOLDER: &str = "Click On Edit And set Your Gender";
pub const ADDRESS_PLACEHOLDER: &str = "Add Your Address";
pub const SCHOOL_PLACEHOLDER: &str = "Add Your School Name";
pub const INITIALS_FALLBACK: &str = "U";
pub const CURRENCY_SYMBOL: &str = "₹";

// User-facing messages
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const FILL_ALL_FIELDS_MESSAGE: &str = "Please fill all fields";
pub const ENTER_EMAIL_MESSAGE: &str = "Please enter email";
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";
