mod menu_vm;
mod question_vm;
mod result_vm;

pub use menu_vm::{DifficultyChoiceVm, DifficultyMenuVm, NameEntryVm, map_difficulty_menu, map_name_entry};
pub use question_vm::{OptionVm, QuestionScreenVm, format_hearts, map_question_screen};
pub use result_vm::{FinalScoreVm, GameOverVm, map_final_score, map_game_over};
