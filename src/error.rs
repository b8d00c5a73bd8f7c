/// Everything that can go wrong while setting up or running a simulation.
/// None of these are retried; the driver stops the affected run and
/// reports the condition.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(
        "size mismatch: expected length {expected}, found {found} ({what})"
    )]
    SizeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("singular tridiagonal system: zero pivot at row {row}")]
    SingularSystem { row: usize },

    #[error("grid too small: {size} nodes, at least 3 required")]
    GridTooSmall { size: usize },

    #[error("invalid grid: length {length} and dx {dx} must be positive")]
    InvalidGrid { length: f64, dx: f64 },

    #[error("invalid parameter {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("image of {width} x {height} pixels is too large")]
    ImageTooLarge { width: usize, height: usize },

    #[error("no scheme results stored")]
    NoResults,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
