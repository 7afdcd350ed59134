/// Export file stem for the uniform cube data set
pub const UNIFORM_CUBE_FILE_STEM: &str = "point_cloud";

/// Export file stem for the star map data set
pub const STAR_MAP_FILE_STEM: &str = "star_map";

pub const PLY_EXTENSION: &str = "ply";
pub const CSV_EXTENSION: &str = "csv";
