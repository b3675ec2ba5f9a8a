pub mod clock;
pub mod config;
pub mod entity;
pub mod error;
pub mod geometry;
pub mod obstacle;
pub mod physics;
pub mod player;
pub mod scene;
pub mod session;
pub mod sprites;
pub mod world;

#[cfg(test)]
mod test_helpers;

pub use config::GameConfig;
pub use error::SpriteError;
pub use physics::FrameInput;
pub use session::{GameEvent, Session, SessionState};
