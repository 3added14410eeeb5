pub mod enrollment_status;
pub mod major;
pub mod role;

#[cfg(feature = "database")]
mod db_value;

pub use enrollment_status::EnrollmentStatus;
pub use major::Major;
pub use role::Role;
