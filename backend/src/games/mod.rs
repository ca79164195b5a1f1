pub mod backend_slot_game;
pub mod backend_wheel_game;
