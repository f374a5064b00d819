pub mod api_utils;
pub mod number_input;
pub mod page_frame;
pub mod session;
