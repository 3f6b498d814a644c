use log::Level;

pub const OWNER_NAME: &str = "Abhishek Kumar";
pub const OWNER_FIRST_NAME: &str = "Abhishek";
pub const CONTACT_EMAIL: &str = "abhishek.patna.dev@gmail.com";
pub const CONTACT_PHONE: &str = "7979708232";
pub const CONTACT_PHONE_DISPLAY: &str = "+91 7979708232";
pub const LOCATION: &str = "Patna, Bihar, India";
pub const RESPONSE_TIME: &str = "Within 24 hours";
pub const COPYRIGHT_YEAR: u16 = 2024;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose reveal/watcher tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
