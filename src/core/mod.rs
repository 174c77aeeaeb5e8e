pub mod text_utils;

pub use text_utils::{
    LeadingIdentifier, compute_identifier_range_within_literal, decapitalize,
    extract_leading_identifier, replace_leading_identifier,
};
