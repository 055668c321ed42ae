use crate::config::GameConfig;
use crate::profanity::BannedWords;
use crate::util::valid_nick;

/// Identity fields a client sends when joining.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct JoinRequest {
    pub nickname: String,
    pub password: String,
}

impl JoinRequest {
    pub fn new(nickname: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
            password: password.into(),
        }
    }
}

/// Why a join request was turned away. Messages are safe to show the player.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinRejection {
    #[error("nickname may only contain letters, digits, underscores and spaces")]
    InvalidNickname,

    #[error("wrong password")]
    WrongPassword,

    #[error("nickname contains a banned word")]
    BannedName,
}

/// Password and profanity checks bound to one immutable configuration.
/// Cheap to share across connection tasks behind an `Arc`.
#[derive(Debug, Clone)]
pub struct IdentityPolicy {
    password: String,
    /// `None` when the bad word filter is off
    banned: Option<BannedWords>,
}

impl IdentityPolicy {
    pub fn new(config: &GameConfig) -> Self {
        let banned = config
            .bad_word_filter
            .then(|| BannedWords::new(&config.bad_words));

        Self {
            password: config.player_pass.clone(),
            banned,
        }
    }

    /// Exact, case-sensitive comparison with the configured password.
    pub fn valid_pass(&self, attempt: &str) -> bool {
        attempt == self.password
    }

    /// True when the filter is on and `candidate` contains a banned word.
    pub fn bad_names(&self, candidate: &str) -> bool {
        self.banned
            .as_ref()
            .is_some_and(|banned| banned.matches(candidate))
    }

    /// Whether the bad word filter was on in the configuration.
    pub fn filter_enabled(&self) -> bool {
        self.banned.is_some()
    }

    /// Gate a new player: nickname, then password, then profanity.
    pub fn admit(&self, request: &JoinRequest) -> Result<(), JoinRejection> {
        let verdict = if !valid_nick(&request.nickname) {
            Err(JoinRejection::InvalidNickname)
        } else if !self.valid_pass(&request.password) {
            Err(JoinRejection::WrongPassword)
        } else if self.bad_names(&request.nickname) {
            Err(JoinRejection::BannedName)
        } else {
            Ok(())
        };

        if let Err(reason) = verdict {
            tracing::debug!("Rejected join for {:?}: {}", request.nickname, reason);
        }
        verdict
    }
}
