pub mod api;
pub mod d503_parts;
pub mod ui;
