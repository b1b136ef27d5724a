pub mod crop;
pub mod fit;
pub mod flatten;
pub mod resize;
