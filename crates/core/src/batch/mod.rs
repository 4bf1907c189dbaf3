pub mod batch_config;
pub mod batch_error;
pub mod batch_logger;
pub mod batch_report;
pub mod image_state;
pub mod path_list;
pub mod process_batch_use_case;
pub mod process_image_use_case;
