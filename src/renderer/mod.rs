//! Rendering output
//!
//! The core never talks to a window or GPU. It hands the host an ordered draw
//! list per frame, plus a tessellated triangle list for backends that want
//! one.

pub mod draw;
pub mod shapes;
pub mod vertex;

pub use draw::{DrawCommand, TextAnchor, draw_list};
pub use shapes::tessellate;
pub use vertex::Vertex;
