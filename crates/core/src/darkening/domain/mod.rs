pub mod darken_error;
pub mod frame_darkener;
pub mod region_source;
