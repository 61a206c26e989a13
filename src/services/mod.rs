// Service module exports

pub mod clock;
pub mod countdown;
pub mod fragment;
pub mod refresh;
pub mod settings;
