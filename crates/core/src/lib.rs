pub mod batch;
pub mod darkening;
pub mod imaging;
pub mod shared;
