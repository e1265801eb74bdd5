pub mod empty_state;
pub mod pagination_controls;
pub mod search_input;
pub mod skeleton;
