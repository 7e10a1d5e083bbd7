pub mod header;
pub mod input_bar;
pub mod message_content;
pub mod message_list;
