mod band;
mod difficulty;
mod player;
mod question;
mod result;

pub use band::ScoreBand;
pub use difficulty::{Difficulty, ParseDifficultyError};
pub use player::{PlayerName, PlayerNameError};
pub use question::{NO_HINT, OPTION_COUNT, Question, QuestionError};
pub use result::{ResultRecord, ResultRecordError};
