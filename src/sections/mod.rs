//! Password analysis sections
//!
//! Each section computes one aspect of the analysis. They are pure
//! functions chained by the analyzer in data-flow order.

mod crack_time;
mod entropy;
mod feedback;
mod improver;
mod pattern;
mod score;
mod variety;

pub use crack_time::{crack_time_section, format_duration, GUESSES_PER_SECOND};
pub use entropy::entropy_section;
pub use feedback::{feedback_section, Feedback};
pub use improver::improver_section;
pub use pattern::pattern_analysis_section;
pub use score::score_section;
pub use variety::character_profile;
