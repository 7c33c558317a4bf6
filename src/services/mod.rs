pub mod ai_service;
pub mod example_selector;
pub mod feedback_service;
pub mod generation_service;
pub mod prompt_service;
pub mod question_service;
pub mod session_service;
