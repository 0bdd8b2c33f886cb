pub mod inspect;
pub mod scene;
