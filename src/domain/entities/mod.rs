pub mod education;
pub mod experience;
pub mod project;
pub mod resume;
pub mod skill;
