pub mod city;
pub mod home;

pub use city::city_page;
pub use home::home_page;
