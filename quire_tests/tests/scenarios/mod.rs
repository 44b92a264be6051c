pub mod determinism;
pub mod failures;
pub mod nullable;
pub mod reflected;
pub mod round_trip;
pub mod specific;
pub mod user;

mod helpers;
