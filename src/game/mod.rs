// Game modules: characters and their behaviors

pub mod characters;
