// Engine modules: character control and frame scheduling

pub mod control;
pub mod game_loop;
