pub mod openai;
pub mod responder;
