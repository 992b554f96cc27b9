//! Simulation constants and tuning parameters.

/// Mean Earth radius in kilometers (spherical model).
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Joules per megaton of TNT equivalent.
pub const JOULES_PER_MEGATON: f64 = 4.184e15;

/// Seconds per day (lead time conversion).
pub const SECONDS_PER_DAY: f64 = 86_400.0;

// --- Crater scaling ---

/// Transient crater diameter coefficient: D_km = 1.8 * Mt^(1/3.4).
pub const CRATER_COEFFICIENT: f64 = 1.8;

/// Crater scaling exponent (1 / 3.4).
pub const CRATER_EXPONENT: f64 = 1.0 / 3.4;

/// Crater depth as a fraction of crater diameter (simple craters).
pub const CRATER_DEPTH_RATIO: f64 = 0.2;

/// Minimum crater depth in kilometers.
pub const CRATER_MIN_DEPTH_KM: f64 = 0.1;

/// Crater diameter below which no crater geometry is emitted (km).
pub const CRATER_VISIBLE_KM: f64 = 0.01;

// --- Damage radius ring ---

/// Damage radius as a multiple of crater diameter.
pub const DAMAGE_RADIUS_FACTOR: f64 = 15.0;

/// Damage radius clamp in kilometers.
pub const DAMAGE_RADIUS_MIN_KM: f64 = 1.0;
pub const DAMAGE_RADIUS_MAX_KM: f64 = 5000.0;

/// Crater diameter clamp before damage radius scaling (km).
pub const DAMAGE_CRATER_MIN_KM: f64 = 0.1;
pub const DAMAGE_CRATER_MAX_KM: f64 = 1000.0;

/// Minimum deflected-point ring radius in kilometers.
pub const DEFLECTED_RING_MIN_KM: f64 = 5.0;

/// Segments per ring / corridor polyline.
pub const PATH_SEGMENTS: usize = 256;

/// Markers and rings sit slightly above the unit sphere surface.
pub const SURFACE_OFFSET: f64 = 1.003;

// --- Wave model ---

/// Number of wave direction samples (fixed, parameter-independent).
pub const WAVE_COUNT: usize = 16;

/// Sub-segments walked outward per wave direction.
pub const WAVE_STEPS: usize = 8;

/// Base wave length in Earth-radius units (~500 km).
pub const WAVE_BASE_LENGTH_RADII: f64 = 0.08;

/// Length / intensity multipliers for land impacts.
pub const WAVE_LAND_LENGTH_FACTOR: f64 = 0.8;
pub const WAVE_LAND_INTENSITY_FACTOR: f64 = 1.2;

/// Length / intensity multipliers for ocean impacts.
pub const WAVE_OCEAN_LENGTH_FACTOR: f64 = 1.2;
pub const WAVE_OCEAN_INTENSITY_FACTOR: f64 = 0.9;

/// Extra length per land/sea transition along a wave path.
pub const WAVE_TRANSITION_LENGTH_GAIN: f64 = 0.1;

/// Refraction accumulated entering shallow water near land.
pub const WAVE_REFRACTION_ENTER_LAND: f64 = 0.1;

/// Refraction accumulated leaving land for open water.
pub const WAVE_REFRACTION_ENTER_SEA: f64 = -0.05;

// --- Deflection model ---

/// Reference miss distance for a guaranteed miss (km).
pub const REQUIRED_MISS_KM: f64 = 1000.0;

/// Miss probability tier thresholds.
pub const MISS_TIER_LIKELY: f64 = 0.7;
pub const MISS_TIER_PARTIAL: f64 = 0.3;

// --- Approach path ---

/// Approach start distance in Earth radii.
pub const APPROACH_START_RADIUS: f64 = 8.0;

/// Terminal path radius for a near miss (passes outside the surface).
pub const APPROACH_END_RADIUS_MISS: f64 = 1.25;

/// Terminal path radius for a hit (grazes the surface).
pub const APPROACH_END_RADIUS_HIT: f64 = 1.02;

/// Target point radius used to aim the approach direction.
pub const APPROACH_TARGET_RADIUS_MISS: f64 = 1.3;
pub const APPROACH_TARGET_RADIUS_HIT: f64 = 1.05;

/// Radial easing exponent: the path stays far out for most of its length.
pub const APPROACH_EASE_EXPONENT: f64 = 1.4;

/// Progress advanced per animation frame (t in [0, 1]).
pub const APPROACH_STEP_PER_FRAME: f64 = 0.0025;

// --- Scenario ---

/// Countdown duration once a scenario starts (seconds).
pub const COUNTDOWN_SECS: u32 = 15;

/// Approach dialog option count (1 correct + 3 wrong).
pub const DIALOG_OPTION_COUNT: usize = 4;

// --- Input clamp ranges ---

pub const DIAMETER_MIN_KM: f64 = 0.001;
pub const DIAMETER_MAX_KM: f64 = 100.0;

pub const DENSITY_MIN_KG_M3: f64 = 100.0;
pub const DENSITY_MAX_KG_M3: f64 = 20_000.0;

pub const VELOCITY_MIN_KM_S: f64 = 1.0;
pub const VELOCITY_MAX_KM_S: f64 = 100.0;

/// Impact angle clamp. The lower bound keeps sin(angle) away from zero
/// in the deflection formulas.
pub const IMPACT_ANGLE_MIN_DEG: f64 = 1.0;
pub const IMPACT_ANGLE_MAX_DEG: f64 = 89.0;

pub const DELTA_V_MIN_M_S: f64 = 0.0;
pub const DELTA_V_MAX_M_S: f64 = 10_000.0;

pub const LEAD_TIME_MIN_DAYS: f64 = 0.0;
pub const LEAD_TIME_MAX_DAYS: f64 = 10_000.0;

pub const LATITUDE_MIN_DEG: f64 = -90.0;
pub const LATITUDE_MAX_DEG: f64 = 90.0;

pub const LONGITUDE_MIN_DEG: f64 = -180.0;
pub const LONGITUDE_MAX_DEG: f64 = 180.0;

// --- Size classification ---

/// Diameter below which an asteroid is "small" (km).
pub const SIZE_SMALL_MAX_KM: f64 = 0.5;

/// Diameter below which an asteroid is "medium" (km).
pub const SIZE_MEDIUM_MAX_KM: f64 = 2.0;

// --- Catalog ---

/// Catalog key for the user-editable profile.
pub const CUSTOM_PROFILE_KEY: &str = "custom";

/// Maximum profiles taken from a fetched catalog page.
pub const CATALOG_MAX_PROFILES: usize = 10;

/// Clamp ranges applied to fetched catalog values.
pub const CATALOG_DENSITY_MIN: f64 = 1000.0;
pub const CATALOG_DENSITY_MAX: f64 = 8000.0;
pub const CATALOG_VELOCITY_MIN: f64 = 5.0;
pub const CATALOG_VELOCITY_MAX: f64 = 50.0;

/// Densities assigned per orbit-class hint (kg/m³).
pub const DENSITY_STONY: f64 = 3000.0;
pub const DENSITY_METALLIC: f64 = 5000.0;
pub const DENSITY_CARBONACEOUS: f64 = 2000.0;
pub const DENSITY_COMETARY: f64 = 1000.0;
