// Shared field tuning constants used by the engine, the software rasterizer
// and (mirrored by hand) the WGSL shader.

// Ring capacities
pub const TRAIL_LEN: usize = 32;
pub const MAX_WAVES: usize = 16;

// Lifetimes (engine-clock seconds)
pub const TRAIL_MAX_AGE: f32 = 1.8;
pub const SHOCK_MAX_AGE: f32 = 3.5;

// Trail sampling
pub const TRAIL_MOVE_EPS: f32 = 0.003; // ignore sub-pixel jitter
pub const TRAIL_INTERVAL: f32 = 0.03; // min seconds between samples
pub const TRAIL_MIN_DIST: f32 = 0.015; // distance that bypasses the interval
pub const TRAIL_UNSET_POS: [f32; 2] = [-1.0, -1.0];

// Speed estimator
pub const SPEED_RATE_RISING: f32 = 0.006;
pub const SPEED_RATE_FALLING: f32 = 0.08;
pub const SPEED_AMBIENT_DECAY: f32 = 0.98; // per frame
pub const SPEED_MIN_DT: f32 = 0.001;

// Intro shock
pub const INTRO_SHOCK_DELAY: f32 = 0.3;
pub const INTRO_SHOCK_ORIGIN: [f32; 2] = [0.5, 0.5];

// Grid
pub const GRID_DENSITY: f32 = 90.0; // cells per unit height
pub const NORMALIZE_EPS: f32 = 0.0001;

// Cursor kernel
pub const CURSOR_SPEED_REF: f32 = 2.2;
pub const CURSOR_SPEED_EXP: f32 = 1.4;
pub const CURSOR_INFLUENCE_BASE: f32 = 0.3;
pub const CURSOR_INFLUENCE_SPAN: f32 = 0.32;
pub const CURSOR_STRENGTH: f32 = 0.4;

// Trail kernel
pub const TRAIL_RADIUS: f32 = 0.08;
pub const TRAIL_GLOW_BASE: f32 = 0.02;
pub const TRAIL_GLOW_SPAN: f32 = 0.2;
pub const TRAIL_GLOW_EXTENT: f32 = 3.0; // glow reach in glow radii
pub const TRAIL_DECAY: f32 = 2.5;
pub const TRAIL_STRENGTH: f32 = 0.32;

// Shock kernel
pub const SHOCK_SPEED: f32 = 0.5;
pub const SHOCK_WIDTH_BASE: f32 = 0.06;
pub const SHOCK_WIDTH_GROWTH: f32 = 0.025;
pub const SHOCK_DECAY: f32 = 0.8;
pub const SHOCK_STRENGTH: f32 = 0.45;

// Dot shape
pub const OFFSET_CLAMP: f32 = 0.38; // keeps dots inside their own cell
pub const NEAR_RADIUS: f32 = 0.24;
pub const DOT_RADIUS: f32 = 0.032;
pub const DOT_RADIUS_NEAR: f32 = 0.04;
pub const DOT_SOFTNESS: f32 = 0.024;

// Color
pub const DOT_BRIGHTNESS: f32 = 0.10;
pub const DOT_BRIGHTNESS_NEAR: f32 = 0.22;
pub const LIGHT_DOT_GREY: f32 = 0.16;
pub const WARM_TINT_DARK: [f32; 3] = [1.4, 0.7, 0.4];
pub const WARM_TINT_LIGHT: [f32; 3] = [0.5, 0.7, 1.2];
pub const TRAIL_TINT_DARK: [f32; 3] = [0.85, 0.5, 0.25];
pub const TRAIL_TINT_LIGHT: [f32; 3] = [0.15, 0.35, 0.7];
pub const SHOCK_TINT_DARK: [f32; 3] = [0.9, 0.5, 0.2];
pub const SHOCK_GAIN: f32 = 6.0;
pub const GRAIN_AMOUNT: f32 = 0.012;
pub const AMBIENT_TINT: [f32; 3] = [0.07, 0.035, 0.02];
pub const AMBIENT_DRIFT_RATE: f32 = 0.08;

// Touch fade
pub const NARROW_VIEWPORT_PX: f32 = 768.0;
pub const TOUCH_FADE_START: f32 = 1.0;
pub const TOUCH_FADE_LEN: f32 = 0.5;

// Focus blur
pub const FOCUS_RADIUS: [f32; 2] = [0.055, 0.025];
pub const FOCUS_CENTER_Y: f32 = 0.47;
pub const FOCUS_BLUR_STEP: f32 = 0.008;
pub const FOCUS_BLUR_TAPS: i32 = 2; // samples per side, 5x5 total

// Pill magnet + spring
pub const PILL_MAGNET_RADIUS_PX: f32 = 500.0;
pub const PILL_MAGNET_STRENGTH_PX: f32 = 5.0;
pub const PILL_SPRING_STIFFNESS: f32 = 200.0;
pub const PILL_SPRING_DAMPING: f32 = 25.0;
pub const PILL_MAX_STEP_SEC: f32 = 1.0 / 120.0; // integrator substep
pub const PILL_MAX_DT_SEC: f32 = 0.1; // longer frame gaps integrate as this
