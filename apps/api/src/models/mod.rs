pub mod tailor;
