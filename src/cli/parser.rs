use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for coursedesk
#[derive(Parser)]
#[command(
    name = "coursedesk",
    version = env!("CARGO_PKG_VERSION"),
    about = "A student course desk: browse your department's catalog, enroll, drop and follow attendance using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this student instead of the configured `student_id`
    #[arg(global = true, long = "student")]
    pub student: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show or check the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "check",
            help = "Check the configuration file and add missing keys with defaults"
        )]
        check: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a course to the catalog
    AddCourse {
        /// Course identifier (e.g. CS101)
        id: String,

        #[arg(long)]
        name: String,

        /// Course code shown to students (defaults to the id)
        #[arg(long)]
        code: Option<String>,

        #[arg(long = "dept")]
        department: String,

        #[arg(long, default_value = "")]
        faculty: String,

        #[arg(long = "desc")]
        description: Option<String>,

        #[arg(long, default_value_t = 1)]
        semester: u32,

        #[arg(long, default_value_t = 3)]
        credits: u32,

        /// Maximum number of enrolled students (unlimited when omitted)
        #[arg(long)]
        capacity: Option<u32>,
    },

    /// Add a student
    AddStudent {
        id: String,

        #[arg(long)]
        name: String,

        #[arg(long = "dept")]
        department: String,
    },

    /// Record one attendance session for the active student
    #[command(group(ArgGroup::new("attendance").required(true).args(["present", "absent"])))]
    Mark {
        course_id: String,

        /// Session date (YYYY-MM-DD or `today`)
        #[arg(long, default_value = "today")]
        date: String,

        #[arg(long)]
        present: bool,

        #[arg(long)]
        absent: bool,
    },

    /// Browse courses open for enrollment in your department
    Catalog {
        #[arg(long, short, help = "Search by name, code or faculty")]
        search: Option<String>,
    },

    /// Enroll in a course
    Enroll { course_id: String },

    /// List your enrolled courses with attendance
    Courses {
        #[arg(long, short, help = "Search by name, code or faculty")]
        search: Option<String>,
    },

    /// Drop an enrolled course (asks for confirmation)
    Drop {
        course_id: String,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Show details and attendance history of a course
    Show { course_id: String },

    /// Export the enrolled-course attendance report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
