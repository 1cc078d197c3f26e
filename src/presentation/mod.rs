// Presentation layer - Rendering for the demo shell
pub mod renderer;
