pub mod question;
pub mod repl;
pub mod setup;
pub mod web_server;

pub use question::run_question_mode;
pub use repl::run_repl_mode;
pub use setup::{lazy_assistant, load_assistant_config};
pub use web_server::run_web_server;
