//! Components shared by the calculator page.
pub mod pico;
pub mod price_calculator;
