pub const DRY_BASE_SPEED: f64 = 280.0;
pub const SPEED_WEAR_COEFFICIENT: f64 = 0.4;
pub const WET_SPEED_FLOOR: f64 = 200.0;
pub const WET_SPEED_DROP: f64 = 15.0;

// tyre_age scale and exponent of the degradation growth curve
pub const WEAR_GROWTH_LAPS: f64 = 15.0;
pub const WEAR_GROWTH_EXPONENT: f64 = 1.5;
pub const WET_EXTRA_WEAR: f64 = 0.3;

pub const BASE_TYRE_TEMP: f64 = 85.0;
pub const TEMP_AGE_COEFFICIENT: f64 = 1.5;
pub const TEMP_WEAR_COEFFICIENT: f64 = 0.2;
pub const TYRE_TEMP_MIN: f64 = 60.0;
pub const TYRE_TEMP_MAX: f64 = 110.0;

// seconds added to a lap at 100% wear, and flat wet-running penalty
pub const WEAR_TIME_PENALTY: f64 = 5.0;
pub const WET_TIME_PENALTY: f64 = 8.0;

// places conceded while stationary in the box
pub const PIT_POSITIONS_LOST: u8 = 2;
pub const LAST_PLACE: u8 = 20;
