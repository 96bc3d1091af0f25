//! Session token CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;

use crate::output::{self, Field, OutputFormat};
use tokenjar_auth::{SESSION_COOKIE_NAME, SessionLookup, SessionManager, SessionPayload};
use tokenjar_core::config::AppConfig;
use tokenjar_core::cookie::{CookieOptions, MemoryCookieJar};
use tokenjar_core::error::AppError;

/// Arguments for token commands
#[derive(Debug, Args)]
pub struct TokenArgs {
    /// Token subcommand
    #[command(subcommand)]
    pub command: TokenCommand,
}

/// Token subcommands
#[derive(Debug, Subcommand)]
pub enum TokenCommand {
    /// Mint a session token for an identity
    Issue {
        /// User identity key
        #[arg(long)]
        user_id: String,
        /// User email
        #[arg(long)]
        email: String,
    },
    /// Verify a token and report what it contains
    Inspect {
        /// The compact token string
        token: String,
    },
}

#[derive(Debug, Serialize)]
struct IssuedSession {
    token: String,
    session: SessionPayload,
    cookie_name: &'static str,
    cookie: CookieOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Inspection {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<SessionPayload>,
}

/// Execute token commands
pub fn execute(args: &TokenArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let manager = SessionManager::new(&config.auth, config.environment)?;

    match &args.command {
        TokenCommand::Issue { user_id, email } => {
            let mut jar = MemoryCookieJar::new();
            let session = manager.create_session(&mut jar, user_id, email)?;
            let cookie = jar
                .cookie(SESSION_COOKIE_NAME)
                .cloned()
                .ok_or_else(|| AppError::internal("Session cookie was not written"))?;

            let fields = vec![
                Field::new("token", &cookie.value),
                Field::new("userId", &session.user_id),
                Field::new("email", &session.email),
                Field::new("expiresAt", &session.expires_at),
                Field::new("cookie", SESSION_COOKIE_NAME),
                Field::new("httpOnly", cookie.options.http_only),
                Field::new("secure", cookie.options.secure),
                Field::new("sameSite", cookie.options.same_site),
                Field::new("path", &cookie.options.path),
            ];
            let issued = IssuedSession {
                token: cookie.value,
                session,
                cookie_name: SESSION_COOKIE_NAME,
                cookie: cookie.options,
            };
            output::print_record(&issued, fields, format);
            Ok(())
        }
        TokenCommand::Inspect { token } => {
            let inspection = Inspection::from(manager.inspect_token(token));
            output::print_record(&inspection, inspection.fields(), format);
            inspection.into_outcome()
        }
    }
}

impl From<SessionLookup> for Inspection {
    fn from(lookup: SessionLookup) -> Self {
        let status = lookup.label();
        match lookup {
            SessionLookup::Valid(session) => Self {
                status,
                reason: None,
                session: Some(session),
            },
            SessionLookup::Invalid(reason) => Self {
                status,
                reason: Some(reason),
                session: None,
            },
            SessionLookup::Expired | SessionLookup::Absent => Self {
                status,
                reason: None,
                session: None,
            },
        }
    }
}

impl Inspection {
    fn fields(&self) -> Vec<Field> {
        let mut fields = vec![Field::new("status", self.status)];
        if let Some(reason) = &self.reason {
            fields.push(Field::new("reason", reason));
        }
        if let Some(session) = &self.session {
            fields.push(Field::new("userId", &session.user_id));
            fields.push(Field::new("email", &session.email));
            fields.push(Field::new("expiresAt", &session.expires_at));
        }
        fields
    }

    /// Non-zero exit unless the token verified.
    fn into_outcome(self) -> Result<(), AppError> {
        match self.session {
            Some(_) => Ok(()),
            None => Err(AppError::authentication(format!("Token is {}", self.status))),
        }
    }
}
