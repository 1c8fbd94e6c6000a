// Scene tuning constants. `SceneConfig::default()` is assembled from these.

// Particle counts
pub const DUST_COUNT: usize = 2000;
pub const STAR_COUNT: usize = 10_000;

// Dust ring shape
pub const DUST_RADIUS_MAX: f32 = 50.0;
pub const DUST_HEIGHT_SPREAD: f32 = 10.0; // total height, centered on y = 0
pub const DUST_SIZE_MAX: f32 = 2.0;

// Starfield cube side, centered on the origin
pub const STARFIELD_EXTENT: f32 = 100.0;

// Point sprite materials (world units)
pub const DUST_POINT_SIZE: f32 = 0.1;
pub const DUST_OPACITY: f32 = 0.6;
pub const STAR_POINT_SIZE: f32 = 0.05;
pub const STAR_COLOR: u32 = 0xFFFFFF;

// Label spheres
pub const LABEL_SPHERE_RADIUS: f32 = 0.2;
pub const LABEL_SPHERE_SEGMENTS: u32 = 32;
pub const SPIRAL_BASE_RADIUS: f32 = 5.0;
pub const SPIRAL_RADIUS_STEP: f32 = 0.5;
pub const LABEL_Z_JITTER: f32 = 5.0; // total span, centered on z = 0
pub const LABEL_ORBIT_SPEED: f32 = 0.2; // rad/s of wall-clock time
pub const LABEL_SPIN_STEP: f32 = 0.01; // rad per frame

// Label material and lighting
pub const LABEL_COLOR: u32 = 0xFFD700;
pub const LABEL_EMISSIVE: u32 = 0x996515;
pub const LABEL_SHININESS: f32 = 100.0;
pub const LABEL_SPECULAR: u32 = 0x111111;
pub const AMBIENT_LIGHT: u32 = 0x404040;
pub const POINT_LIGHT_COLOR: u32 = 0xFFFFFF;
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;
pub const POINT_LIGHT_POSITION: [f32; 3] = [10.0, 10.0, 10.0];

// Per-frame animation increments
pub const DUST_SPIN_STEP: f32 = 0.0005; // rad per frame about y
pub const BACKGROUND_SPIN_STEP: [f32; 3] = [0.0002, 0.0003, 0.0001]; // rad per frame (x, y, z)
pub const GRADIENT_STEP: f32 = 0.002; // progress per frame, ~8 s per cross-fade at 60 Hz

// Background plane
pub const BACKGROUND_Z: f32 = -1.0;
// Depth half-range of the background camera; covers the plane at any rotation.
pub const BACKGROUND_DEPTH: f32 = 3.0;

// Main camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_Z: f32 = 15.0;

// Orbit controls
pub const ORBIT_DAMPING: f32 = 0.05;
pub const ORBIT_MIN_DISTANCE: f32 = 5.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_ROTATE_SPEED: f32 = 1.0;
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;

// Page
pub const TITLE: &str = "Galactic Words";
pub const MOUNT_TARGET_ID: &str = "galaxy-root";

pub const DUST_COLORS: [u32; 5] = [
    0x8E9196, // neutral gray
    0x1A1F2C, // dark purple
    0x403E43, // charcoal gray
    0x8A898C, // medium gray
    0xC8C8C9, // light gray
];

pub const GRADIENT_COLORS: [u32; 5] = [
    0x2A0845, // deep purple
    0x6441A5, // bright purple
    0xFF0080, // hot pink
    0x7928CA, // electric purple
    0x4299E1, // sky blue
];

pub const WORDS: [&str; 15] = [
    "Stardust",
    "Cosmos",
    "Galaxy",
    "Nebula",
    "Celestial",
    "Infinity",
    "Dreams",
    "Wonder",
    "Mystery",
    "Journey",
    "Beyond",
    "Eternal",
    "Stellar",
    "Cosmic",
    "Astral",
];
