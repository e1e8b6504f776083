//! Then steps for sign-in session BDD scenarios.

use super::world::SignInWorld;
use requesthub::notify::domain::Severity;
use rstest_bdd_macros::then;

#[then(r#"the session is authenticated as "{role}" named "{name}""#)]
fn session_is_authenticated(
    world: &SignInWorld,
    role: String,
    name: String,
) -> Result<(), eyre::Report> {
    let actual_role = world
        .session
        .role()
        .ok_or_else(|| eyre::eyre!("expected an authenticated session"))?;
    if actual_role.as_str() != role {
        return Err(eyre::eyre!(
            "expected role {role}, found {}",
            actual_role.as_str()
        ));
    }
    if world.session.display_name() != Some(name.as_str()) {
        return Err(eyre::eyre!(
            "expected display name {name}, found {:?}",
            world.session.display_name()
        ));
    }
    Ok(())
}

#[then("the session stays anonymous")]
fn session_stays_anonymous(world: &SignInWorld) -> Result<(), eyre::Report> {
    if world.session.is_authenticated() {
        return Err(eyre::eyre!("expected the session to stay anonymous"));
    }
    Ok(())
}

#[then("a welcome notification is published")]
fn welcome_notification_published(world: &SignInWorld) -> Result<(), eyre::Report> {
    let published = world.sink.published();
    let welcome = published
        .iter()
        .find(|notification| notification.text().starts_with("Welcome,"))
        .ok_or_else(|| eyre::eyre!("expected a welcome notification"))?;
    if welcome.severity() != Severity::Success {
        return Err(eyre::eyre!("welcome notification should be a success"));
    }
    Ok(())
}

#[then("exactly one failure notification is published")]
fn exactly_one_failure_published(world: &SignInWorld) -> Result<(), eyre::Report> {
    let failures: Vec<_> = world
        .sink
        .published()
        .into_iter()
        .filter(|notification| notification.severity() == Severity::Error)
        .collect();
    if failures.len() != 1 {
        return Err(eyre::eyre!(
            "expected exactly one failure notification, found {}",
            failures.len()
        ));
    }
    Ok(())
}

#[then("a sign-out notification is published")]
fn sign_out_notification_published(world: &SignInWorld) -> Result<(), eyre::Report> {
    let published = world.sink.published();
    if !published
        .iter()
        .any(|notification| notification.text() == "You have signed out")
    {
        return Err(eyre::eyre!("expected a sign-out notification"));
    }
    Ok(())
}
