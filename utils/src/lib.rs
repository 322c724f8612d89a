mod material;
pub mod moves;
mod position;
mod san;

pub use material::{has_insufficient_material, side_has_insufficient_material};
pub use moves::{collect_legal_moves, gives_check, has_check, has_legal_moves, is_capture};
pub use position::Position;
pub use san::move_to_san;
