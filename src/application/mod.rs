pub mod session;
pub mod use_cases;

pub use session::Session;
pub use use_cases::export::{export_json, MIGRATED_FILE_NAME, SAMPLE_CSV, SAMPLE_FILE_NAME};
pub use use_cases::migration::run_migration;
pub use use_cases::preview::render_table;
pub use use_cases::seo_check::{format_report, run_seo_check};
