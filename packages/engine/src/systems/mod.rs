pub mod carousel;
pub mod icon_body;
pub mod icon_physics;
