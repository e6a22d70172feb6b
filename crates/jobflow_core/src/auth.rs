use crate::AuthMode;

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

/// Local state of the login/register form. Nothing here leaves the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

impl AuthForm {
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            error: None,
            notice: None,
        }
    }

    /// Fields shown for the current mode, in tab order.
    pub fn fields(&self) -> &'static [AuthField] {
        match self.mode {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Register => &[AuthField::Name, AuthField::Email, AuthField::Password],
        }
    }

    pub fn value(&self, field: AuthField) -> &str {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
        }
    }

    pub fn set(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        let missing = match self.mode {
            AuthMode::Login => self.email.is_empty() || self.password.is_empty(),
            AuthMode::Register => {
                self.name.is_empty() || self.email.is_empty() || self.password.is_empty()
            }
        };
        if missing {
            return Err("Please fill in all fields".to_string());
        }
        if self.mode == AuthMode::Register && self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            ));
        }
        Ok(())
    }

    /// Runs validation and records the outcome on the form.
    pub fn submit(&mut self) -> bool {
        match self.validate() {
            Ok(()) => {
                self.error = None;
                self.notice = Some(
                    match self.mode {
                        AuthMode::Login => "Signed in (Mock)",
                        AuthMode::Register => "Registration successful (Mock)",
                    }
                    .to_string(),
                );
                true
            }
            Err(message) => {
                self.error = Some(message);
                self.notice = None;
                false
            }
        }
    }
}
