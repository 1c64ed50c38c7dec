pub mod use_price_calculator;
