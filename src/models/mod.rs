pub mod attendance;
pub mod course;
pub mod student;

pub use attendance::AttendanceRecord;
pub use course::Course;
pub use student::Student;
