use thiserror::Error;

// Failures of the geometry core. Both kinds are returned to the caller,
// who decides whether to abort setup or skip the current frame.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
  // Invalid setup values. Raised before any frame is processed.
  #[error("Configuration error: {0}")]
  Configuration(String),
  // Input for which a single estimate or projection is undefined.
  #[error("Domain error: {0}")]
  Domain(String),
}

pub type GeometryResult<T> = std::result::Result<T, GeometryError>;

pub fn check_finite(value: f64, what: &str) -> GeometryResult<f64> {
  if value.is_finite() {
    Ok(value)
  }
  else {
    Err(GeometryError::Domain(format!("{} is not finite.", what)))
  }
}
