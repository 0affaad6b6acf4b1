mod common;
mod education;
mod experience;
mod service;
