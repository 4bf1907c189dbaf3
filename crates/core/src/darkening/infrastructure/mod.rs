pub mod cpu_spot_darkener;
pub mod darkener_factory;
pub mod polygon_mask;
pub mod random_region_source;
