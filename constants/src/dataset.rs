/// Number of points in the uniform cube data set
pub const UNIFORM_CUBE_COUNT: usize = 1000;

/// Half edge length of the uniform cube
pub const UNIFORM_CUBE_SPREAD: f32 = 5.0;

/// Number of stars in the star map data set
pub const STAR_MAP_COUNT: usize = 20_000;

/// Half edge length of the cube the stars are scattered in
pub const STAR_MAP_SPREAD: f32 = 5000.0;

/// Lower bound for each star colour channel, keeps stars bright
pub const STAR_MIN_BRIGHTNESS: f32 = 0.5;
