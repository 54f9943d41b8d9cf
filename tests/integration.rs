#[path = "integration/frontend.rs"]
mod frontend;
#[path = "integration/resolve.rs"]
mod resolve;
