//! Recorded draw streams.
//!
//! Responsibilities:
//! - capture the primitive calls a shape issues, in call order
//! - keep per-primitive payloads isolated under `scene::shapes`
//!
//! [`DrawList`] is a [`RenderTarget`](crate::surface::RenderTarget), so it can
//! stand in for any real surface when the exact call sequence matters.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::circle::CircleCmd;
pub use shapes::polygon::PolygonCmd;
