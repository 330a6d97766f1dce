//! Default values for configuration

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_POSTAL_PATH: &str = "./data/postcodes.json";
pub const DEFAULT_DIVISIONS_PATH: &str = "./data/divisions.json";
