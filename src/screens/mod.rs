pub mod reflections;
