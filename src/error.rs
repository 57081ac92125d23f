use thiserror::Error;

/// Top-level error type for hull computations.
#[derive(Debug, Error)]
pub enum HullError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors related to geometric input and parameters.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {parameter} = {value} must be positive and finite")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("vertex {label} has a non-finite coordinate ({x}, {y})")]
    NonFinite { label: u64, x: f64, y: f64 },

    #[error("cannot compute hull: all {0} points are collinear")]
    Collinear(usize),
}

/// Errors related to the vertex/edge arena and boundary structure.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),

    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}

/// Errors related to hull operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("cannot compute hull: {found} distinct points given, at least 3 required")]
    InsufficientInput { found: usize },

    #[error("vertex label {0} is used more than once")]
    DuplicateLabel(u64),
}

/// Convenience type alias for results using [`HullError`].
pub type Result<T> = std::result::Result<T, HullError>;
