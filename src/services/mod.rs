//! Filename parsing services

pub mod filename_parser;
pub mod text_utils;

pub use filename_parser::{
    ParsedMovie, ParsedShow, ShowInfo, TokenizedName, parse_movie, parse_show, tokenize,
};
pub use text_utils::title_case;
