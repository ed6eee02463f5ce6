use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Highlighting mode declared for a paste's text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum Syntax {
    #[serde(rename = "None")]
    PlainText,
    Javascript,
    Python,
    Ruby,
    Perl,
    C,
    Scheme,
}

impl Syntax {
    pub const ALL: [Syntax; 7] = [
        Syntax::PlainText,
        Syntax::Javascript,
        Syntax::Python,
        Syntax::Ruby,
        Syntax::Perl,
        Syntax::C,
        Syntax::Scheme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Syntax::PlainText => "None",
            Syntax::Javascript => "Javascript",
            Syntax::Python => "Python",
            Syntax::Ruby => "Ruby",
            Syntax::Perl => "Perl",
            Syntax::C => "C",
            Syntax::Scheme => "Scheme",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|syntax| syntax.as_str() == value)
    }
}

/// Visibility of a paste
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Exposure {
    Public,
    Private,
}

impl Exposure {
    pub const ALL: [Exposure; 2] = [Exposure::Public, Exposure::Private];

    pub fn as_str(self) -> &'static str {
        match self {
            Exposure::Public => "public",
            Exposure::Private => "private",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|exposure| exposure.as_str() == value)
    }
}

/// Opaque owner identifier, kept exactly as the client sent it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct UserId(pub Value);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// A stored text snippet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Paste {
    pub id: u64,
    pub name: String,
    pub syntax: Syntax,
    pub exposure: Exposure,
    /// Time-to-live; stored as given and never acted upon
    pub expiration: u64,
    pub text: String,
    pub user_id: UserId,
}

impl Paste {
    pub fn from_new(id: u64, new: NewPaste) -> Self {
        Paste {
            id,
            name: new.name,
            syntax: new.syntax,
            exposure: new.exposure,
            expiration: new.expiration,
            text: new.text,
            user_id: new.user_id,
        }
    }

    /// Overwrites every mutable field. `id` and `user_id` stay as they are.
    pub fn apply(&mut self, update: PasteUpdate) {
        self.name = update.name;
        self.syntax = update.syntax;
        self.exposure = update.exposure;
        self.expiration = update.expiration;
        self.text = update.text;
    }
}

/// Validated payload of a create request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewPaste {
    pub name: String,
    pub syntax: Syntax,
    pub exposure: Exposure,
    pub expiration: u64,
    pub text: String,
    pub user_id: UserId,
}

/// Validated payload of an update request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PasteUpdate {
    pub name: String,
    pub syntax: Syntax,
    pub exposure: Exposure,
    pub expiration: u64,
    pub text: String,
}

/// Request body for POST /pastes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreatePasteRequest {
    pub data: NewPaste,
}

/// Request body for PUT /pastes/{paste_id}
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePasteRequest {
    pub data: PasteUpdate,
}

/// Response envelope for a single paste
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PasteResponse {
    pub data: Paste,
}

/// Response envelope for GET /pastes
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PasteListResponse {
    pub data: Vec<Paste>,
}
