//! Behaviour tests for the demo sign-in session.

mod sign_in_steps;

use rstest_bdd_macros::scenario;
use sign_in_steps::world::{SignInWorld, world};

#[scenario(
    path = "tests/features/sign_in_session.feature",
    name = "Sign in with valid demo credentials"
)]
#[tokio::test(flavor = "multi_thread")]
async fn sign_in_with_valid_credentials(world: SignInWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_in_session.feature",
    name = "Reject invalid credentials"
)]
#[tokio::test(flavor = "multi_thread")]
async fn reject_invalid_credentials(world: SignInWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/sign_in_session.feature",
    name = "Sign out returns to the anonymous state"
)]
#[tokio::test(flavor = "multi_thread")]
async fn sign_out_returns_to_anonymous(world: SignInWorld) {
    let _ = world;
}
