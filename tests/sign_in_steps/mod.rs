//! Step modules for sign-in session BDD scenarios.

pub mod world;

mod given;
mod then;
mod when;
