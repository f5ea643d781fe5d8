//! Client-side checks mirroring the auth service's registration constraints.

pub const USERNAME_LEN: std::ops::RangeInclusive<usize> = 3..=50;
pub const PASSWORD_LEN: std::ops::RangeInclusive<usize> = 6..=40;
pub const EMAIL_MAX_LEN: usize = 100;

pub fn validate_registration(username: &str, email: &str, password: &str) -> Result<(), String> {
    let username_len = username.trim().chars().count();
    if !USERNAME_LEN.contains(&username_len) {
        return Err(format!(
            "Username must be between {} and {} characters",
            USERNAME_LEN.start(),
            USERNAME_LEN.end()
        ));
    }
    validate_email(email.trim())?;
    if !PASSWORD_LEN.contains(&password.chars().count()) {
        return Err(format!(
            "Password must be between {} and {} characters",
            PASSWORD_LEN.start(),
            PASSWORD_LEN.end()
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), String> {
    if email.is_empty() {
        return Err("Email cannot be blank".into());
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(format!("Email cannot exceed {} characters", EMAIL_MAX_LEN));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err("Invalid email format".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_registration() {
        assert!(validate_registration("ada", "ada@example.edu", "secret").is_ok());
    }

    #[test]
    fn username_length_is_bounded() {
        assert!(validate_registration("ab", "ada@example.edu", "secret").is_err());
        assert!(validate_registration(&"a".repeat(50), "ada@example.edu", "secret").is_ok());
        assert!(validate_registration(&"a".repeat(51), "ada@example.edu", "secret").is_err());
    }

    #[test]
    fn email_must_look_like_an_address() {
        for email in ["", "ada", "@example.edu", "ada@", "a@b@c"] {
            assert!(
                validate_registration("ada", email, "secret").is_err(),
                "accepted {:?}",
                email
            );
        }
        let long = format!("{}@example.edu", "a".repeat(100));
        assert_eq!(
            validate_registration("ada", &long, "secret"),
            Err(String::from("Email cannot exceed 100 characters"))
        );
    }

    #[test]
    fn password_length_is_bounded() {
        assert!(validate_registration("ada", "ada@example.edu", "12345").is_err());
        assert!(validate_registration("ada", "ada@example.edu", &"p".repeat(40)).is_ok());
        assert!(validate_registration("ada", "ada@example.edu", &"p".repeat(41)).is_err());
    }
}
