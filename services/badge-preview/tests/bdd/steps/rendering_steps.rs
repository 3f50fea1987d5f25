//! BDD step definitions for badge rendering feature

use cucumber::{given, then, when};

use crate::world::BadgePreviewWorld;

#[given(expr = "the status {string}")]
fn given_status(world: &mut BadgePreviewWorld, status: String) {
    world.status = Some(status);
}

#[given("an empty status")]
fn given_empty_status(world: &mut BadgePreviewWorld) {
    world.status = Some(String::new());
}

#[when("the badge is rendered")]
fn render_badge(world: &mut BadgePreviewWorld) {
    let status = world.status.as_deref().expect("status not set");
    world.classes = Some(status_badge::classes_for(status));
    world.rendered = Some(status_badge::render(status));
}

#[then(expr = "the badge classes should be {string}")]
fn classes_should_be(world: &mut BadgePreviewWorld, expected: String) {
    let classes = world.classes.expect("badge not rendered");
    assert_eq!(classes, expected);
}

#[then(expr = "the badge classes should include {string}")]
fn classes_should_include(world: &mut BadgePreviewWorld, expected: String) {
    let classes = world.classes.expect("badge not rendered");
    assert!(
        classes.split(' ').any(|class| class == expected),
        "Expected classes '{}' to include '{}'",
        classes,
        expected
    );
}

#[then(expr = "the badge text should be {string}")]
fn text_should_be(world: &mut BadgePreviewWorld, expected: String) {
    let rendered = world.rendered.as_ref().expect("badge not rendered");
    assert!(
        rendered.ends_with(&format!("\">{}</span></div>", expected)),
        "Expected badge text '{}', got:\n{}",
        expected,
        rendered
    );
}

#[then("the badge text should be empty")]
fn text_should_be_empty(world: &mut BadgePreviewWorld) {
    let rendered = world.rendered.as_ref().expect("badge not rendered");
    assert!(rendered.ends_with("\"></span></div>"));
}

#[then(expr = "the rendered badge should not contain {string}")]
fn rendered_not_contains(world: &mut BadgePreviewWorld, unexpected: String) {
    let rendered = world.rendered.as_ref().expect("badge not rendered");
    assert!(
        !rendered.contains(&unexpected),
        "Expected badge not to contain '{}', got:\n{}",
        unexpected,
        rendered
    );
}

#[then(expr = "the rendered badge should contain {string}")]
fn rendered_contains(world: &mut BadgePreviewWorld, expected: String) {
    let rendered = world.rendered.as_ref().expect("badge not rendered");
    assert!(
        rendered.contains(&expected),
        "Expected badge to contain '{}', got:\n{}",
        expected,
        rendered
    );
}

#[then("rendering it again should give the same output")]
fn render_again_identical(world: &mut BadgePreviewWorld) {
    let status = world.status.as_deref().expect("status not set");
    let rendered = world.rendered.as_ref().expect("badge not rendered");
    assert_eq!(&status_badge::render(status), rendered);
    assert_eq!(
        status_badge::classes_for(status),
        world.classes.expect("badge not rendered")
    );
}
