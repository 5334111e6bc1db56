use thiserror::Error;

/// Rejected curve parameters.
///
/// Raised by `curve::validate` before any point is evaluated; the generator
/// never returns a partial dataset.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DipError {
    #[error("Invalid width {0}: must be > 0.")]
    NonPositiveWidth(f64),
    #[error("Invalid grid size {0}: must be > 1.")]
    GridTooSmall(usize),
    #[error("Invalid grid size {0}: must be <= {}.", crate::math::MAX_GRID_POINTS)]
    GridTooLarge(usize),
    #[error("Grid [{low}, {high}] is too narrow for {size} distinct points.")]
    GridTooDense { low: f64, high: f64, size: usize },
    #[error("Invalid grid range [{low}, {high}]: low must be < high.")]
    EmptyGridRange { low: f64, high: f64 },
    #[error("Invalid zone [{low}, {high}]: low must be <= high.")]
    InvertedZone { low: f64, high: f64 },
    #[error("Zone [{zone_low}, {zone_high}] is outside the grid [{grid_low}, {grid_high}].")]
    ZoneOutsideGrid {
        zone_low: f64,
        zone_high: f64,
        grid_low: f64,
        grid_high: f64,
    },
    #[error("Parameter '{0}' must be finite.")]
    NonFinite(&'static str),
}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl From<DipError> for AppError {
    fn from(err: DipError) -> Self {
        AppError::new(2, err.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
