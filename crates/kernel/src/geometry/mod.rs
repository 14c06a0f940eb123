pub mod angle;
pub mod point;
pub mod rotation;
pub mod vector;
