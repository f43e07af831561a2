pub mod client;
pub mod gemini;
pub mod route_resolver;
