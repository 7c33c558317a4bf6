pub mod feedback_dto;
pub mod generate_dto;
pub mod session_dto;
