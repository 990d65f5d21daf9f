mod course_vm;
mod document_vm;
mod flashcard_vm;
mod markdown_vm;
mod quiz_vm;
mod time_fmt;
mod upload_vm;
mod workspace_vm;

pub use course_vm::{CourseCardVm, map_course_cards};
pub use document_vm::{DocumentCardVm, kind_label, map_document_cards};
pub use flashcard_vm::FlashcardVm;
pub use markdown_vm::{markdown_to_html, sanitize_html, summary_html};
pub use quiz_vm::{OptionState, QuizOptionVm, QuizVm};
pub use time_fmt::format_date;
pub use upload_vm::UploadStatus;
pub use workspace_vm::{TabVm, map_tabs, tab_label};
