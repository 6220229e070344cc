/// `mycli fs`: file helpers.
pub mod fs;
/// `mycli gen-ts`: TypeScript file generation.
pub mod gen_ts;
/// `mycli time`: calendar and time helpers.
pub mod time;
/// `mycli version`: print the configured version.
pub mod version;
