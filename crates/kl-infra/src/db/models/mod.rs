pub mod daily_override_row;
pub mod pass_level_row;
pub mod pass_progress_row;
pub mod team_row;
pub mod user_row;
pub mod word_row;

pub use daily_override_row::{DailyOverrideRow, NewDailyOverrideRow};
pub use pass_level_row::{NewPassLevelRow, PassLevelRow};
pub use pass_progress_row::{NewPassProgressRow, PassProgressRow};
pub use team_row::{NewTeamRow, TeamRow};
pub use user_row::{NewUserRow, UserRow};
pub use word_row::{NewWordRow, WordRow};
