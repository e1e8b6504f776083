//! Given steps for sign-in session BDD scenarios.

use super::world::{SignInWorld, run_async};
use rstest_bdd_macros::given;

#[given("the sign-in form is available")]
fn sign_in_form_available(world: &mut SignInWorld) {
    world.session = requesthub::session::domain::Session::Anonymous;
}

#[given("a signed-in administrator")]
fn signed_in_administrator(world: &mut SignInWorld) -> Result<(), eyre::Report> {
    let session = run_async(world.service.sign_in("admin", "admin123"))
        .map_err(|err| eyre::eyre!("administrator sign-in failed: {err}"))?;
    world.session = session;

    // Scenarios assert on notifications published after this point.
    let _ = world.sink.drain();
    Ok(())
}
