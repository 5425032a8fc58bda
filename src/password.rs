/// Rendering mode of a password-style input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Masked (`type="password"`)
    Password,
    /// Shown in clear (`type="text"`)
    Text,
}

impl InputKind {
    /// Read an input's `type` attribute. Anything but `password` is plain text.
    pub fn from_type_attr(value: &str) -> Self {
        if value.eq_ignore_ascii_case("password") {
            InputKind::Password
        } else {
            InputKind::Text
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Password => "password",
            InputKind::Text => "text",
        }
    }

    /// Reveal a masked field, mask a revealed one
    pub fn toggled(self) -> Self {
        match self {
            InputKind::Password => InputKind::Text,
            InputKind::Text => InputKind::Password,
        }
    }
}
