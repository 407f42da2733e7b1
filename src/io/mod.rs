pub mod lengths;
