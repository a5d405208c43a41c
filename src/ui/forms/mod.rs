//! Form rendering module
//!
//! - `field_renderer`: Field rendering utilities
//! - `company_form`: The company profile form and its action panel

mod company_form;
mod field_renderer;

pub use company_form::draw as draw_company_form;
