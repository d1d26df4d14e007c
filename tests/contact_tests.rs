// Host-side tests for the contact form state machine.

use portfolio_web::core::{ContactForm, Field, SubmitError, SubmitStatus};

fn filled() -> ContactForm {
    let mut form = ContactForm::default();
    form.set_field(Field::Name, "Ada");
    form.set_field(Field::Email, "a@b.com");
    form.set_field(Field::Message, "Hi");
    form
}

#[test]
fn submit_goes_idle_pending_success_and_clears_fields() {
    let mut form = filled();
    let mut seen = vec![form.status().clone()];

    let sent = form.begin_submit().expect("idle form accepts submit");
    seen.push(form.status().clone());
    assert_eq!(sent.name, "Ada");
    assert_eq!(sent.email, "a@b.com");
    assert_eq!(sent.message, "Hi");

    form.finish_submit(Ok(())).expect("pending form accepts completion");
    seen.push(form.status().clone());

    assert_eq!(
        seen,
        vec![SubmitStatus::Idle, SubmitStatus::Pending, SubmitStatus::Success]
    );
    for field in Field::ALL {
        assert_eq!(form.field(field), "");
    }
}

#[test]
fn success_sticks_until_next_edit() {
    let mut form = filled();
    form.begin_submit().expect("submit");
    form.finish_submit(Ok(())).expect("finish");
    assert_eq!(form.status(), &SubmitStatus::Success);
    assert!(form.notice().is_some());

    form.set_field(Field::Name, "G");
    assert_eq!(form.status(), &SubmitStatus::Idle);
    assert!(form.notice().is_none());
}

#[test]
fn transport_failure_keeps_fields_and_reports_error() {
    let mut form = filled();
    form.begin_submit().expect("submit");
    form.finish_submit(Err(SubmitError::Transport("timeout".into())))
        .expect("finish");
    match form.status() {
        SubmitStatus::Error(reason) => assert!(reason.contains("timeout")),
        other => panic!("unexpected status {:?}", other),
    }
    assert_eq!(form.field(Field::Message), "Hi");
    assert!(!form.is_pending());

    // A failed submission may be retried
    assert!(form.begin_submit().is_ok());
}

#[test]
fn button_reflects_pending_state() {
    let mut form = filled();
    assert_eq!(form.button_label(), "Send Message");
    form.begin_submit().expect("submit");
    assert_eq!(form.button_label(), "Sending...");
    assert_eq!(form.begin_submit(), Err(SubmitError::AlreadyPending));
}

#[test]
fn fields_map_to_element_ids() {
    for field in Field::ALL {
        assert_eq!(Field::from_element_id(field.element_id()), Some(field));
    }
    assert_eq!(Field::from_element_id("project-search"), None);
}
