use crate::constants::{
    ADDRESS_PLACEHOLDER, BIO_PLACEHOLDER, FIELD_PLACEHOLDER, GENDER_PLACEHOLDER,
    INITIALS_FALLBACK, SCHOOL_PLACEHOLDER,
};
use crate::models::UserProfile;

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(placeholder)
}

/// Two-letter avatar text, `U` when either name is missing
pub fn initials(user: Option<&UserProfile>) -> String {
    let first = user.and_then(|u| u.first_name.as_deref()).and_then(|n| n.chars().next());
    let last = user.and_then(|u| u.last_name.as_deref()).and_then(|n| n.chars().next());
    match (first, last) {
        (Some(f), Some(l)) => format!("{}{}", f, l).to_uppercase(),
        _ => INITIALS_FALLBACK.to_string(),
    }
}

/// Label/value pairs for the personal details card
pub fn detail_rows(user: &UserProfile) -> Vec<(&'static str, String)> {
    let details = user.details().cloned().unwrap_or_default();
    let field =
        |value: Option<&str>, placeholder: &str| or_placeholder(value, placeholder).to_string();

    let phone = user
        .contact_number
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .or(details.contact_number.as_deref());
    let account_type = user.account_type.as_ref().map(|a| a.to_string());

    vec![
        ("First Name", field(user.first_name.as_deref(), FIELD_PLACEHOLDER)),
        ("Last Name", field(user.last_name.as_deref(), FIELD_PLACEHOLDER)),
        ("Account Type", field(account_type.as_deref(), FIELD_PLACEHOLDER)),
        ("Email", field(user.email.as_deref(), FIELD_PLACEHOLDER)),
        ("Gender", field(details.gender.as_deref(), GENDER_PLACEHOLDER)),
        ("Phone Number", field(phone, FIELD_PLACEHOLDER)),
        ("Address", field(details.address.as_deref(), ADDRESS_PLACEHOLDER)),
        ("School Name", field(details.school_name.as_deref(), SCHOOL_PLACEHOLDER)),
        ("Date Of Birth", field(details.date_of_birth.as_deref(), FIELD_PLACEHOLDER)),
    ]
}

/// Full dashboard text: header, bio and details
pub fn render_profile(user: &UserProfile) -> String {
    let name = [user.first_name.as_deref(), user.last_name.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = format!("({}) {}\n", initials(Some(user)), name);
    if let Some(email) = &user.email {
        out.push_str(&format!("     {}\n", email));
    }

    out.push_str("\nMy Bio\n");
    out.push_str(&format!("  {}\n", or_placeholder(user.about(), BIO_PLACEHOLDER)));

    out.push_str("\nPersonal Details\n");
    let rows = detail_rows(user);
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        out.push_str(&format!("  {:<w$}  {}\n", label, value, w = width));
    }
    out
}
