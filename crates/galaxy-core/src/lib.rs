pub mod animation;
pub mod background;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod geometry;
pub mod labels;
pub mod orbit;
pub mod particles;
pub mod scene;
pub mod view;

pub use animation::*;
pub use background::*;
pub use camera::*;
pub use config::*;
pub use geometry::*;
pub use labels::*;
pub use orbit::*;
pub use particles::*;
pub use scene::*;
pub use view::*;

// Shaders bundled as string constants
pub static BACKGROUND_WGSL: &str = include_str!("../shaders/background.wgsl");
pub static POINTS_WGSL: &str = include_str!("../shaders/points.wgsl");
pub static SPHERES_WGSL: &str = include_str!("../shaders/spheres.wgsl");
