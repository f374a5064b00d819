pub mod d503_parts;
