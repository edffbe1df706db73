pub mod gettime;
pub mod timeout;
