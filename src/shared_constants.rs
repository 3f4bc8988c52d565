use embassy_time::Duration;

/// How often the clock polls the wall-clock time.
pub const CYCLE_TIME: Duration = Duration::from_secs(5);
/// Poll interval while test mode fast-forwards the clock (one simulated minute per poll).
pub const TEST_MODE_CYCLE_TIME: Duration = Duration::from_millis(500);

pub const MINUTES_PER_HOUR: u8 = 60;
pub const HOURS_PER_DAY: u8 = 24;
pub const HOURS_PER_DIAL: u8 = 12;

/// Width of one band of the decision ladder, in minutes.
pub const MINUTES_PER_BAND: u8 = 5;
/// Number of single-minute indicator dots.
pub const MINUTE_DOT_COUNT: usize = 4;

// The shipped faces are 13 columns by 11 rows, minute dots in the corners.
pub const GRID_COLUMNS: usize = 13;
pub const GRID_ROWS: usize = 11;
pub const GRID_CELL_COUNT: usize = GRID_COLUMNS * GRID_ROWS;
