//! Application constants and configuration

pub const RATES_BASE_URL: &str = "https://open.er-api.com/v6/latest";
pub const FLAGS_BASE_URL: &str = "https://flagsapi.com";
pub const PROVIDER_HOME_URL: &str = "https://open.er-api.com";
pub const APP_NAME: &str = "Currency Converter";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_SOURCE: &str = "USD";
pub const DEFAULT_TARGET: &str = "INR";
pub const DEFAULT_AMOUNT: &str = "1";

/// Substituted for any amount that does not parse to a positive number
pub const FALLBACK_AMOUNT: f64 = 1.0;

/// Shown in place of the converted value whenever a fetch fails
pub const ERROR_TEXT: &str = "Error fetching rate";
