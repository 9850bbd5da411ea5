//! Stylus input: contact samples, hit testing and the parameter mapper.

pub mod mapper;
pub mod sample;
