pub mod quiz;
pub mod semester;

pub use quiz::{output_file_name, output_folder_name, QuizFolder, QuizPart, PARTS_PER_QUIZ};
pub use semester::{season_rank, sort_semesters, SemesterFolder};
