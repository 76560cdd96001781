use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlacementError {
    /// Canvas cannot hold even one particle inside its walls
    #[error("canvas {width}x{height} is too small for particles of radius {radius}")]
    CanvasTooSmall { width: f64, height: f64, radius: f64 },

    #[error("placement infeasible: gave up on particle {placed} after {attempts} attempts")]
    Infeasible { placed: usize, attempts: u32 },
}
