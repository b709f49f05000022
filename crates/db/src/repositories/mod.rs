pub mod certification_repo;
pub mod course_repo;
pub mod department_repo;
pub mod directory_repo;
pub mod employee_repo;
pub mod endorsement_repo;
pub mod enrollment_repo;
pub mod nomination_repo;
pub mod notification_preference_repo;
pub mod notification_repo;
pub mod profile_repo;
pub mod skill_repo;

pub use certification_repo::CertificationRepo;
pub use course_repo::CourseRepo;
pub use department_repo::DepartmentRepo;
pub use directory_repo::DirectoryRepo;
pub use employee_repo::EmployeeRepo;
pub use endorsement_repo::{EndorseOutcome, EndorsementRepo};
pub use enrollment_repo::{CancelOutcome, EnrollOutcome, EnrollmentRepo};
pub use nomination_repo::NominationRepo;
pub use notification_preference_repo::NotificationPreferenceRepo;
pub use notification_repo::NotificationRepo;
pub use profile_repo::{CreateProfileOutcome, ProfileRepo};
pub use skill_repo::SkillRepo;
