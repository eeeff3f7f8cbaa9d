/// Username reserved for the global administrator account
pub const RESERVED_ADMIN_USERNAME: &str = "admin";

/// Minimum username length accepted at registration (in characters)
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Minimum password length accepted at registration (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 4;

/// Number of minutes in a calendar day; event minutes live in `[0, MINUTES_PER_DAY)`
pub const MINUTES_PER_DAY: i32 = 1440;

/// Color used when an event is created without one
pub const DEFAULT_EVENT_COLOR: &str = "#4f46e5";

/// Color used when a category is created without one
pub const DEFAULT_CATEGORY_COLOR: &str = "#64748b";

/// First hour row rendered by the week grid
pub const DEFAULT_WEEK_START_HOUR: u32 = 6;

/// Hour at which the week grid stops (exclusive)
pub const DEFAULT_WEEK_END_HOUR: u32 = 22;

/// Number of cells in a month grid (six full weeks)
pub const MONTH_GRID_CELLS: usize = 42;

/// Canonical storage and input format for event dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
