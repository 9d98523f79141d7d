//! Playing a game: the session and the player's slot selection.

mod selection;
mod session;

pub use selection::{claim, Claim, Pick, Selection};
pub use session::{GameSession, GameStatus};
