pub mod ray;
pub mod receiver;
pub mod scene;
pub mod sweep;
