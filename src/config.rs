/// Columns of the standard field.
pub const FIELD_WIDTH: usize = 9;
/// Rows of the standard field.
pub const FIELD_HEIGHT: usize = 9;

/// Largest grid the per-cell bitboards can hold.
pub const MAX_FIELD_CELLS: usize = u128::BITS as usize;

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "MINEFIELD_LOG";
