use anyhow::Result;
use colored::Colorize;

use crate::{
    app::{init_config, AppContext},
    cart::{Cart, CheckoutStatus},
    models::{CartItem, LoginForm, ProfileUpdate, SignUpForm},
    session::{GateState, RefetchOutcome, Route},
    utils::{ErrorKind, StudyHubError},
    views::{render_cart, render_courses, render_profile, Alert},
};

use super::args::{CartArgs, Commands, ProfileAction, ProfileUpdateArgs, SignupArgs};

/// Print an alert on the stream matching its level; returns whether it was a success
fn show(alert: &Alert) -> bool {
    if alert.is_success() {
        println!("{}", alert);
    } else {
        eprintln!("{}", alert);
    }
    alert.is_success()
}

/// Handle one CLI subcommand
///
/// Returns `Ok(false)` when the command ran but the user saw a failure.
pub async fn handle_command(ctx: &mut AppContext, command: Commands) -> Result<bool> {
    match command {
        Commands::Init => run_init(),
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Status { route } => Ok(show_status(ctx, route.as_deref())),
        Commands::Login { email, password } => {
            let result = ctx.auth.login(&LoginForm::new(email, password)).await;
            Ok(show(&Alert::from_result(&result, "Login successful!", "Login failed")))
        }
        Commands::SendOtp { email } => {
            let result = ctx.auth.send_otp(&email).await;
            Ok(show(&Alert::from_result(
                &result,
                "OTP sent to your email",
                "Failed to send OTP",
            )))
        }
        Commands::Signup(args) => sign_up(ctx, args).await,
        Commands::Logout => {
            let alert = match ctx.sign_out().await {
                Ok(()) => Alert::success("You have been signed out"),
                Err(e) => Alert::from_error(&e, "Failed to sign out"),
            };
            Ok(show(&alert))
        }
        Commands::Profile { action } => {
            if !ensure_session(ctx, Route::ProfileDashboard) {
                return Ok(false);
            }
            match action.unwrap_or(ProfileAction::Show) {
                ProfileAction::Show => show_profile(ctx).await,
                ProfileAction::Bio { about } => {
                    save_profile(
                        ctx,
                        ProfileUpdate::bio(about),
                        "Bio updated successfully",
                        "Failed to update bio",
                    )
                    .await
                }
                ProfileAction::Update(args) => {
                    save_profile(
                        ctx,
                        details_update(args),
                        "Details updated successfully",
                        "Failed to update details",
                    )
                    .await
                }
            }
        }
        Commands::Courses => {
            if !ensure_session(ctx, Route::EnrolledCourses) {
                return Ok(false);
            }
            let result = ctx.courses.get_enrolled_courses().await;
            match result {
                Ok(response) if response.success => {
                    println!("{}", render_courses(&response.data.unwrap_or_default()));
                    Ok(true)
                }
                other => Ok(show(&Alert::from_result(
                    &other,
                    "",
                    "Failed to fetch enrolled courses",
                ))),
            }
        }
        Commands::Cart(args) => {
            if !ensure_session(ctx, Route::Cart) {
                return Ok(false);
            }
            Ok(run_cart(args))
        }
    }
}

/// Write the default configuration file unless one exists
pub fn run_init() -> Result<bool> {
    println!("Initializing StudyHub configuration...");
    let (path, created) = init_config()?;
    if created {
        println!("Created default configuration at: {}", path.display());
    } else {
        println!("Configuration already exists at: {}", path.display());
    }
    Ok(true)
}

/// Show version information
pub fn show_version() {
    println!("StudyHub v{}", env!("CARGO_PKG_VERSION"));
    println!("   Command-line client for the StudyHub learning platform");
}

fn show_status(ctx: &mut AppContext, route: Option<&str>) -> bool {
    println!("StudyHub Status:");
    println!();

    let state = ctx.gate.evaluate(&ctx.tokens);
    match state {
        GateState::Authenticated => println!("  [OK] Session: token stored"),
        _ => println!("  [WARNING] Session: not logged in"),
    }
    if let Some(initial) = ctx.gate.initial_route() {
        println!("  Start screen: {}", initial);
    }
    println!("  API: {}", ctx.config.api.base_url);

    if let Some(name) = route {
        let route = Route::resolve(name);
        let reachable = !route.requires_session() || state == GateState::Authenticated;
        if route == Route::NotFound {
            println!("  [ERROR] Screen '{}': not found", name);
        } else if reachable {
            println!("  [OK] Screen {}: reachable", route);
        } else {
            println!("  [WARNING] Screen {}: log in first", route);
        }
    }

    println!();
    true
}

/// The gate decides whether a screen that needs a session can be opened
fn ensure_session(ctx: &mut AppContext, route: Route) -> bool {
    if route.requires_session() && ctx.gate.evaluate(&ctx.tokens) != GateState::Authenticated {
        eprintln!(
            "{} You are not logged in. Run `studyhub login` first.",
            "[WARNING]".yellow().bold()
        );
        return false;
    }
    true
}

async fn sign_up(ctx: &AppContext, args: SignupArgs) -> Result<bool> {
    let form = SignUpForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.email,
        contact_number: args.contact_number,
        password: args.password,
        confirm_password: args.confirm_password,
        otp: args.otp,
    };
    let result = ctx.auth.sign_up(&form).await;
    let ok = show(&Alert::from_result(
        &result,
        "Account created successfully!",
        "Signup failed",
    ));
    if ok {
        println!("Log in with: studyhub login --email {}", form.email);
    }
    Ok(ok)
}

async fn show_profile(ctx: &AppContext) -> Result<bool> {
    match ctx.user.refetch().await {
        Ok(RefetchOutcome::Updated) | Ok(RefetchOutcome::Superseded) => {}
        Ok(RefetchOutcome::Rejected(message)) => {
            let text = message.unwrap_or_else(|| "Failed to fetch user".to_string());
            show(&Alert::failure(ErrorKind::Rejected, text));
            return Ok(false);
        }
        Err(e) => {
            show(&Alert::from_error(&e, "Failed to fetch user"));
            return Ok(false);
        }
    }

    match ctx.user.user().await {
        Some(user) => {
            print!("{}", render_profile(&user));
            Ok(true)
        }
        None => Ok(false),
    }
}

fn details_update(args: ProfileUpdateArgs) -> ProfileUpdate {
    ProfileUpdate {
        about: None,
        first_name: args.first_name,
        last_name: args.last_name,
        contact_number: args.contact_number,
        gender: args.gender,
        address: args.address,
        school_name: args.school_name,
        date_of_birth: args.date_of_birth,
    }
}

async fn save_profile(
    ctx: &AppContext,
    update: ProfileUpdate,
    success: &str,
    fallback: &str,
) -> Result<bool> {
    if update.is_empty() {
        return Ok(show(&Alert::failure(ErrorKind::Validation, "Nothing to update")));
    }

    let result = ctx.profile.update_profile(&update).await;
    if !show(&Alert::from_result(&result, success, fallback)) {
        return Ok(false);
    }
    show_profile(ctx).await
}

/// Parse `ID:NAME:PRICE`; the name may itself contain colons
fn parse_cart_item(input: &str) -> Result<CartItem, StudyHubError> {
    let invalid = || {
        StudyHubError::ValidationError(format!(
            "Invalid cart item '{}', expected ID:NAME:PRICE",
            input
        ))
    };

    let (id, rest) = input.split_once(':').ok_or_else(invalid)?;
    let (name, price) = rest.rsplit_once(':').ok_or_else(invalid)?;
    let price: f64 = price.trim().parse().map_err(|_| invalid())?;
    if id.trim().is_empty() || name.trim().is_empty() || !price.is_finite() || price < 0.0 {
        return Err(invalid());
    }

    Ok(CartItem {
        id: id.trim().to_string(),
        course_name: name.trim().to_string(),
        price,
        thumbnail: String::new(),
    })
}

fn run_cart(args: CartArgs) -> bool {
    let mut cart = Cart::new();
    for input in &args.add {
        match parse_cart_item(input) {
            Ok(item) => {
                cart.add(item);
            }
            Err(e) => return show(&Alert::from_error(&e, "")),
        }
    }
    for id in &args.remove {
        cart.remove(id);
    }

    println!("{}", render_cart(&cart));

    if args.checkout {
        return match cart.checkout() {
            CheckoutStatus::Empty => {
                show(&Alert::failure(ErrorKind::Validation, "Your cart is empty"))
            }
            CheckoutStatus::NotAvailable => {
                println!("{} Checkout is not available yet", "[INFO]".yellow().bold());
                true
            }
        };
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::ScriptedTransport;
    use crate::app::Config;
    use crate::storage::TokenStore;
    use serde_json::json;
    use std::sync::Arc;

    #[test]
    fn test_parse_cart_item() {
        let item = parse_cart_item("c1:Rust: The Book:499").unwrap();
        assert_eq!(item.id, "c1");
        assert_eq!(item.course_name, "Rust: The Book");
        assert_eq!(item.price, 499.0);

        assert!(parse_cart_item("c1:499").is_err());
        assert!(parse_cart_item("c1:Rust:free").is_err());
        assert!(parse_cart_item(":Rust:1").is_err());
        assert!(parse_cart_item("c1:Rust:-3").is_err());
    }

    #[test]
    fn test_details_update_never_sends_about() {
        let update = details_update(ProfileUpdateArgs {
            gender: Some("Female".into()),
            ..ProfileUpdateArgs::default()
        });
        assert_eq!(update.about, None);
        assert_eq!(update.gender.as_deref(), Some("Female"));
    }

    #[tokio::test]
    async fn test_profile_requires_session() {
        let transport = Arc::new(ScriptedTransport::new());
        let mut ctx =
            AppContext::with_parts(Config::default(), TokenStore::in_memory(), transport.clone());

        let ok = handle_command(&mut ctx, Commands::Courses).await.unwrap();
        assert!(!ok);
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_cart_requires_session() {
        let transport = Arc::new(ScriptedTransport::new());
        let cart = || {
            Commands::Cart(CartArgs {
                add: vec!["c1:Rust:499".into()],
                remove: vec![],
                checkout: false,
            })
        };

        let mut signed_out =
            AppContext::with_parts(Config::default(), TokenStore::in_memory(), transport.clone());
        assert!(!handle_command(&mut signed_out, cart()).await.unwrap());

        let tokens = TokenStore::in_memory();
        tokens.save("tok").unwrap();
        let mut signed_in = AppContext::with_parts(Config::default(), tokens, transport.clone());
        assert!(handle_command(&mut signed_in, cart()).await.unwrap());
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_login_command_reports_failure() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(401, json!({ "success": false, "message": "bad credentials" })),
        );
        let tokens = TokenStore::in_memory();
        let mut ctx = AppContext::with_parts(Config::default(), tokens.clone(), transport);

        let ok = handle_command(
            &mut ctx,
            Commands::Login {
                email: "a@b.com".into(),
                password: "pw".into(),
            },
        )
        .await
        .unwrap();
        assert!(!ok);
        assert_eq!(tokens.get(), None);
    }

    #[tokio::test]
    async fn test_bio_command_updates_then_refetches() {
        let transport = Arc::new(
            ScriptedTransport::new()
                .reply(200, json!({ "success": true }))
                .reply(200, json!({
                    "success": true,
                    "data": { "_id": "u1", "additionalDetails": { "about": "hi" } }
                })),
        );
        let tokens = TokenStore::in_memory();
        tokens.save("tok").unwrap();
        let mut ctx = AppContext::with_parts(Config::default(), tokens, transport.clone());

        let ok = handle_command(
            &mut ctx,
            Commands::Profile {
                action: Some(ProfileAction::Bio { about: "hi".into() }),
            },
        )
        .await
        .unwrap();

        assert!(ok);
        assert_eq!(ctx.user.user().await.unwrap().about(), Some("hi"));
        let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/profile/updateProfile", "/profile/getUserDetails"]);
    }

    #[test]
    fn test_cart_command() {
        assert!(run_cart(CartArgs {
            add: vec!["c1:Rust:499".into()],
            remove: vec!["missing".into()],
            checkout: true,
        }));
        assert!(!run_cart(CartArgs {
            add: vec!["broken".into()],
            remove: vec![],
            checkout: false,
        }));
    }
}
