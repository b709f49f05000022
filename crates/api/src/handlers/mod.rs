pub mod certification;
pub mod course;
pub mod directory;
pub mod endorsement;
pub mod enrollment;
pub mod nomination;
pub mod notification;
pub mod profile;
