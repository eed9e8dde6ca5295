use super::{min_len, FieldErrors};
use crate::models::{LoginRequest, UpdateUserRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD: &'static str = "password";

    pub fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, Self::USERNAME, &self.username, 1, "Username is required");
        if self.password.is_empty() {
            errors.add(Self::PASSWORD, "Password is required");
        }
        errors.finish(|| LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Profile form for `PUT /users/{id}`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub password: String,
    pub email: String,
}

impl UserForm {
    pub const USERNAME: &'static str = "username";
    pub const PASSWORD: &'static str = "password";
    pub const EMAIL: &'static str = "email";

    pub fn validate(&self) -> Result<UpdateUserRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, Self::USERNAME, &self.username, 1, "Username is required");
        if self.password.chars().count() < 6 {
            errors.add(Self::PASSWORD, "Password must be at least 6 characters");
        }
        if !looks_like_email(self.email.trim()) {
            errors.add(Self::EMAIL, "Enter a valid email address");
        }
        errors.finish(|| UpdateUserRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            email: self.email.trim().to_string(),
        })
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.starts_with('.') && domain.contains('.') && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert!(errors.has(LoginForm::USERNAME));
        assert!(errors.has(LoginForm::PASSWORD));

        let ok = LoginForm {
            username: " admin ".into(),
            password: " secret".into(),
        };
        let request = ok.validate().unwrap();
        assert_eq!(request.username, "admin");
        assert_eq!(request.password, " secret");
    }

    #[test]
    fn test_user_form_rules() {
        let form = UserForm {
            username: "manager".into(),
            password: "12345".into(),
            email: "manager@".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(!errors.has(UserForm::USERNAME));
        assert!(errors.has(UserForm::PASSWORD));
        assert!(errors.has(UserForm::EMAIL));

        assert!(looks_like_email("a@b.vn"));
        assert!(!looks_like_email("a@.vn"));
        assert!(!looks_like_email("@b.vn"));
    }
}
