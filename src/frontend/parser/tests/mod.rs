//! Parser unit tests

mod declarations;

use super::ast::Module;
use super::parse;

/// Parse source that is expected to be valid
pub(crate) fn module(source: &str) -> Module {
    parse(source, "test.tgm").expect("source should parse").module
}

/// Parse source that is expected to fault, returning the message
pub(crate) fn parse_err(source: &str) -> String {
    parse(source, "test.tgm")
        .expect_err("source should not parse")
        .message()
}
