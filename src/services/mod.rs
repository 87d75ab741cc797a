pub mod part_locator;
pub mod quiz_finder;
pub mod semester_scanner;

pub use part_locator::find_quiz_parts;
pub use quiz_finder::{find_quiz_folders, parse_quiz_folder};
pub use semester_scanner::{parse_semester_folder, scan_semesters};
