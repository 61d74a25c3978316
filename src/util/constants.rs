//! Application-wide constants for StayScout.
//!
//! Centralising magic numbers and configuration defaults here keeps the rest
//! of the codebase clean and makes tuning straightforward.

/// Application display name used in titles, dialogs, etc.
pub const APP_NAME: &str = "StayScout";

/// Application version string.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the nightly price slider (in whole currency units).
pub const PRICE_MIN: u32 = 0;

/// Upper bound of the nightly price slider. Also the default `max` of a
/// fresh price range, so a draft at `[PRICE_MIN, PRICE_MAX]` means
/// "price not filtered".
pub const PRICE_MAX: u32 = 999;

/// Maximum star rating. A rating of 0 means "no star filter".
pub const STARS_MAX: u8 = 5;

/// Minimum stay length enforced between check-in and check-out, in nights.
pub const MIN_NIGHTS: i64 = 1;

/// Fixed path of the search-results route. Query parameters encoded from the
/// filter draft are appended to this path on submission.
pub const SEARCH_PATH: &str = "/searchHotel";

/// Default width of the filter side panel (logical pixels).
pub const FILTER_PANEL_WIDTH: f32 = 280.0;

/// Application data subdirectory name for logs and configuration.
pub const APP_DATA_DIR: &str = "StayScout";

/// Log subdirectory name under the app data directory.
pub const LOG_DIR: &str = "logs";

/// Log file name for persistent error/debug logging.
pub const LOG_FILE_NAME: &str = "stayscout.log";

/// Maximum log file size in bytes before rotation (5 MB).
pub const MAX_LOG_FILE_SIZE: u64 = 5 * 1024 * 1024;
