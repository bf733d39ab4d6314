use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "studyhub")]
#[command(version)]
#[command(
    about = "Sign in, manage your profile and browse your StudyHub courses",
    long_about = None
)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the API base URL (e.g. http://localhost:4000/api/v1)
    #[arg(long, global = true, env = "STUDYHUB_API_BASE_URL")]
    pub api_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a default configuration file
    Init,
    /// Show whether a session is stored and where the client would start
    Status {
        /// Also check whether this screen is reachable (e.g. EnrolledCourses)
        route: Option<String>,
    },
    /// Log in and store the session token
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "STUDYHUB_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Email a one-time password for signup
    SendOtp {
        #[arg(short, long)]
        email: String,
    },
    /// Create a student account with the OTP from your email
    Signup(SignupArgs),
    /// Forget the stored session token
    Logout,
    /// Show or edit your profile
    Profile {
        #[command(subcommand)]
        action: Option<ProfileAction>,
    },
    /// List enrolled courses with progress
    Courses,
    /// Build a cart for this run and show the total
    Cart(CartArgs),
    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct SignupArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(short, long)]
    pub email: String,
    #[arg(long)]
    pub contact_number: String,
    #[arg(long, env = "STUDYHUB_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, env = "STUDYHUB_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,
    #[arg(long)]
    pub otp: String,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Show the profile dashboard (default)
    Show,
    /// Replace the "about" text
    Bio {
        about: String,
    },
    /// Update personal details; only given fields are sent
    Update(ProfileUpdateArgs),
}

#[derive(Args, Debug, Default)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub contact_number: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub school_name: Option<String>,
    /// Date of birth as the backend expects it (e.g. 2001-04-12)
    #[arg(long)]
    pub date_of_birth: Option<String>,
}

#[derive(Args, Debug)]
pub struct CartArgs {
    /// Item to add, as ID:NAME:PRICE (repeatable)
    #[arg(long = "add", value_name = "ID:NAME:PRICE")]
    pub add: Vec<String>,
    /// Course id to remove after adding (repeatable)
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<String>,
    /// Try to check out
    #[arg(long)]
    pub checkout: bool,
}
