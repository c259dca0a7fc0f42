pub mod debug;
pub mod kevinpanaro;
pub mod raw_hid_example;
