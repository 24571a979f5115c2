// Reading-room web API client modules

pub mod likes;
