pub mod geom;
pub mod sim;

// Prelude
pub use geom::line::Line;
pub use geom::point::Point;
pub use geom::segment::Segment;
pub use geom::vector::Vector;
pub use sim::ray::{ImageLog, Ray};
pub use sim::receiver::Receiver;
