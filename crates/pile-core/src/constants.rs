// Shared layout tuning constants used by both web and native front-ends.

// R2 quasirandom sequence (reciprocals of the plastic constant and its square)
pub const R2_A1: f64 = 0.754_877_666_246_692_7;
pub const R2_A2: f64 = 0.569_840_290_998_053_2;
pub const R2_START: f64 = 0.5;

// Mixer input salts: base = index * INDEX + theme * THEME + seed * SEED
pub const SALT_INDEX: i64 = 3;
pub const SALT_THEME: i64 = 997;
pub const SALT_SEED: i64 = 7919;

// Clamp policy for the final position (percent of the pile box)
pub const LEFT_MIN: f64 = -5.0;
pub const LEFT_MAX: f64 = 90.0;
pub const TOP_MIN: f64 = 0.0;
pub const TOP_MAX: f64 = 98.0;

// Viewport center that tightness pulls toward
pub const CENTER: f64 = 50.0;

// Stacking levels assigned from the x-scatter hash (1..=STACK_LEVELS)
pub const STACK_LEVELS: f64 = 20.0;

// Drag-to-front counter starts above every hashed stack index
pub const DRAG_Z_START: i64 = 100;

// Theme offsets fed into the mixer base
pub const THEME_OFFSET_LIGHT: i64 = 0;
pub const THEME_OFFSET_DARK: i64 = 97;

// Responsive photo widths (percent of viewport)
pub const MOBILE_SIZE_FACTOR: f64 = 2.6;
pub const MOBILE_WIDTH_MAX: f64 = 50.0;
pub const TABLET_SIZE_FACTOR: f64 = 1.5;
pub const TABLET_WIDTH_MAX: f64 = 35.0;
pub const MOBILE_BREAKPOINT_PX: u32 = 640;
pub const TABLET_BREAKPOINT_PX: u32 = 1024;

// Grid view
pub const GRID_ROTATIONS: [f64; 6] = [1.0, -0.5, 0.3, -1.0, 0.7, -0.2];
pub const GRID_STAGGER_MS: f64 = 50.0;

// Photo catalog
pub const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "avif"];
pub const PHOTO_ALT: &str = "Mihai & Alesia";
