// Presentation layer - Command line and HTML output
pub mod cli;
pub mod html_page;
