//! LLM integration for essayforge.
//!
//! This module provides the narrow client used for assignment prompt and
//! sample essay generation. Every remote call goes through the
//! [`LlmProvider`] trait so the formatting and parsing logic elsewhere in
//! the crate can be tested without a live endpoint.
//!
//! ```ignore
//! use essayforge::llm::{ChatClient, GenerationRequest, LlmProvider, Message};
//!
//! let client = ChatClient::with_openrouter("api-key".to_string());
//! let request = GenerationRequest::new(
//!     "",
//!     vec![
//!         Message::system("You are an experienced teacher."),
//!         Message::user("Suggest an essay topic about photosynthesis."),
//!     ],
//! );
//! let response = client.generate(request).await?;
//! ```

pub mod client;

pub use client::{
    ChatClient, Choice, GenerationRequest, GenerationResponse, LlmProvider, Message, Usage,
};
