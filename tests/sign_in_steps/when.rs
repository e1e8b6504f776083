//! When steps for sign-in session BDD scenarios.

use super::world::{SignInWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{username}" signs in with password "{password}""#)]
fn submit_credentials(world: &mut SignInWorld, username: String, password: String) {
    let result = run_async(world.service.sign_in(&username, &password));
    if let Ok(session) = &result {
        world.session = session.clone();
    }
    world.last_result = Some(result);
}

#[when("the user signs out")]
fn sign_out(world: &mut SignInWorld) {
    world.session = run_async(world.service.sign_out());
}
