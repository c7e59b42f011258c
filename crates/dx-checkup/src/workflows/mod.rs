pub mod checksheet;
