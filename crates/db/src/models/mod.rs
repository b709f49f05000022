pub mod certification;
pub mod course;
pub mod department;
pub mod employee;
pub mod endorsement;
pub mod enrollment;
pub mod nomination;
pub mod notification;
pub mod profile;
pub mod skill;
