//! Integration tests for the full pipeline:
//! - Dependency gate over concatenated modules
//! - Extraction and OID resolution on realistic module text
//! - Forest assembly and flat/forest consistency
//! - Directory loading through MibParser

mod tests_end_to_end;
mod tests_mib_parser;
