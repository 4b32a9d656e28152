//! Session gate: the login form and the authenticated flag.
//!
//! Credentials are never checked. Submitting the form only starts a
//! simulated delay; when it completes the gate opens.

/// Authentication status of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthStatus {
    #[default]
    LoggedOut,
    /// Waiting for the simulated login delay
    Authenticating,
    Authenticated,
}

/// Field of the login form that receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub focused: Option<LoginField>,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focused: Some(LoginField::Email),
        }
    }
}

impl LoginForm {
    /// Text of the focused field, empty when nothing is focused.
    pub fn focused_text(&self) -> &str {
        match self.focused {
            Some(LoginField::Email) => &self.email,
            Some(LoginField::Password) => &self.password,
            None => "",
        }
    }

    pub fn set_focused_text(&mut self, text: String) {
        match self.focused {
            Some(LoginField::Email) => self.email = text,
            Some(LoginField::Password) => self.password = text,
            None => {}
        }
    }

    pub fn focus_next(&mut self) {
        self.focused = Some(match self.focused {
            Some(LoginField::Email) => LoginField::Password,
            Some(LoginField::Password) | None => LoginField::Email,
        });
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionGate {
    pub status: AuthStatus,
    pub form: LoginForm,
}

impl SessionGate {
    pub fn authenticated() -> Self {
        Self {
            status: AuthStatus::Authenticated,
            form: LoginForm::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated
    }

    pub fn is_authenticating(&self) -> bool {
        self.status == AuthStatus::Authenticating
    }

    /// Start the simulated login. Returns false if a login is already
    /// pending or the gate is already open.
    pub fn submit(&mut self) -> bool {
        if self.status != AuthStatus::LoggedOut {
            return false;
        }
        self.status = AuthStatus::Authenticating;
        self.form.focused = None;
        true
    }

    /// Complete a pending login. Returns false when nothing was pending.
    pub fn log_in(&mut self) -> bool {
        if self.status != AuthStatus::Authenticating {
            return false;
        }
        self.status = AuthStatus::Authenticated;
        true
    }

    /// Close the gate and reset the form.
    pub fn sign_out(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_then_log_in() {
        let mut gate = SessionGate::default();
        assert!(gate.submit());
        assert!(gate.is_authenticating());
        assert!(!gate.submit());
        assert!(gate.log_in());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_log_in_without_submit_is_ignored() {
        let mut gate = SessionGate::default();
        assert!(!gate.log_in());
        assert_eq!(gate.status, AuthStatus::LoggedOut);
    }

    #[test]
    fn test_any_credentials_accepted() {
        let mut gate = SessionGate::default();
        gate.form.email = "not an email".into();
        assert!(gate.submit());
        assert!(gate.log_in());
    }

    #[test]
    fn test_focus_cycles_between_fields() {
        let mut form = LoginForm::default();
        form.set_focused_text("a@b.c".into());
        form.focus_next();
        form.set_focused_text("secret".into());
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.password, "secret");
        form.focus_next();
        assert_eq!(form.focused, Some(LoginField::Email));
    }

    #[test]
    fn test_sign_out_resets_form() {
        let mut gate = SessionGate::authenticated();
        gate.form.email = "x".into();
        gate.sign_out();
        assert_eq!(gate.status, AuthStatus::LoggedOut);
        assert!(gate.form.email.is_empty());
    }
}
