//! Cell arena server core.
//!
//! Mass/radius conversion, nickname and password checks, the profanity
//! filter, and the geometry and spawn helpers the game loop calls into.

pub mod config;
pub mod identity;
pub mod profanity;
pub mod util;

pub use cellarena_shared::Point;
pub use config::{Arena, ConfigError, GameConfig};
pub use identity::{IdentityPolicy, JoinRejection, JoinRequest};
pub use profanity::BannedWords;
pub use util::{get_distance, log, mass_to_radius, valid_nick};
