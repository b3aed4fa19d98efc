//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same inputs and frame
//! durations it produces the same results:
//! - Time only advances through `tick`'s `dt`
//! - No rendering, input or asset dependencies
//! - Projectiles are processed in spawn order

pub mod aim;
pub mod collision;
pub mod enemy;
pub mod mask;
pub mod player;
pub mod projectile;
pub mod rect;
pub mod state;
pub mod tick;

pub use aim::{bearing_angle_degrees, direction_towards, within_cone};
pub use collision::{Collidable, check_collision};
pub use enemy::Enemy;
pub use mask::CollisionMask;
pub use player::Player;
pub use projectile::{Projectile, VerticalDirection};
pub use rect::Rect;
pub use state::{GameEvent, GameState, Sprite, SpriteSet, VisualId};
pub use tick::{DirectionKeys, TickInput, tick};
