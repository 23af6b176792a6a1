pub mod transformer;
pub mod types;
pub mod view_port;

pub use transformer::{AffineTransform, Transformer};
pub use types::{Point, Rect, Viewport};
pub use view_port::ViewPortHandler;
