use crate::bridge;
use hush_content::{validate_contact, ContactRequest};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Idle,
    Sending,
    Sent(i64),
    Failed(String),
}

impl FormStatus {
    fn message(&self) -> Option<String> {
        match self {
            FormStatus::Idle => None,
            FormStatus::Sending => Some("Sending your request...".to_string()),
            FormStatus::Sent(id) => Some(format!("Thanks! Request #{id} received. We will be in touch shortly.")),
            FormStatus::Failed(reason) => Some(format!("Could not send: {reason}")),
        }
    }

    fn class(&self) -> &'static str {
        match self {
            FormStatus::Failed(_) => "text-right text-xs text-red-300",
            FormStatus::Sent(_) => "text-right text-xs text-emerald-300",
            _ => "text-right text-xs text-white/60",
        }
    }
}

const INPUT_CLASS: &str = "rounded-xl border border-white/15 bg-white/5 px-4 py-3 text-white placeholder:text-white/40 focus:border-gild-300 focus:outline-none";
const LABEL_CLASS: &str = "text-xs uppercase tracking-[0.25em] text-white/60";

/// Custom-requirements form posted to the site backend.
#[component]
pub fn ContactForm() -> impl IntoView {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let organization = create_rw_signal(String::new());
    let scope = create_rw_signal(String::new());
    let requirements = create_rw_signal(String::new());
    let status = create_rw_signal(FormStatus::Idle);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == FormStatus::Sending {
            return;
        }
        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            organization: organization.get_untracked(),
            scope: scope.get_untracked(),
            requirements: requirements.get_untracked(),
        }
        .trimmed();

        if let Err(err) = validate_contact(&request) {
            status.set(FormStatus::Failed(err.to_string()));
            return;
        }

        status.set(FormStatus::Sending);
        spawn_local(async move {
            match bridge::submit_contact(&request).await {
                Ok(receipt) => {
                    for field in [name, email, organization, scope, requirements] {
                        field.set(String::new());
                    }
                    status.set(FormStatus::Sent(receipt.id));
                }
                Err(err) => {
                    tracing::warn!(%err, "contact request failed");
                    status.set(FormStatus::Failed(err.to_string()));
                }
            }
        });
    };

    view! {
      <form class="mx-auto grid max-w-3xl gap-4 text-sm text-white/80" on:submit=submit novalidate=true>
        <div class="grid gap-3 md:grid-cols-2">
          <label class="flex flex-col gap-1">
            <span class=LABEL_CLASS>"Name"</span>
            <input
              type="text"
              name="name"
              required=true
              class=INPUT_CLASS
              placeholder="Jane Doe"
              prop:value=move || name.get()
              on:input=move |ev| name.set(event_target_value(&ev))
            />
          </label>
          <label class="flex flex-col gap-1">
            <span class=LABEL_CLASS>"Email"</span>
            <input
              type="email"
              name="email"
              required=true
              class=INPUT_CLASS
              placeholder="you@hospital.org"
              prop:value=move || email.get()
              on:input=move |ev| email.set(event_target_value(&ev))
            />
          </label>
        </div>
        <div class="grid gap-3 md:grid-cols-2">
          <label class="flex flex-col gap-1">
            <span class=LABEL_CLASS>"Organization"</span>
            <input
              type="text"
              name="organization"
              class=INPUT_CLASS
              placeholder="City NICU Hospital"
              prop:value=move || organization.get()
              on:input=move |ev| organization.set(event_target_value(&ev))
            />
          </label>
          <label class="flex flex-col gap-1">
            <span class=LABEL_CLASS>"Bed count / scope"</span>
            <input
              type="text"
              name="scope"
              class=INPUT_CLASS
              placeholder="e.g., 6 beds pilot, 20 beds scale"
              prop:value=move || scope.get()
              on:input=move |ev| scope.set(event_target_value(&ev))
            />
          </label>
        </div>
        <label class="flex flex-col gap-1">
          <span class=LABEL_CLASS>"Requirements"</span>
          <textarea
            name="requirements"
            rows="4"
            class=INPUT_CLASS
            placeholder="Tell us about certifications, sourcing constraints, or integration needs."
            prop:value=move || requirements.get()
            on:input=move |ev| requirements.set(event_target_value(&ev))
          ></textarea>
        </label>
        <div class="flex items-center justify-end gap-4">
          <p class=move || status.with(FormStatus::class) role="status" aria-live="polite">
            {move || status.with(FormStatus::message)}
          </p>
          <button
            type="submit"
            class="cta-smooth inline-flex items-center justify-center rounded-full bg-white px-6 py-3 text-xs font-semibold uppercase tracking-[0.3em] text-[#0b1626] transition-colors hover:bg-gild-200 disabled:opacity-60"
            disabled=move || status.get() == FormStatus::Sending
          >
            "Send request"
          </button>
        </div>
      </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_form_shows_no_status() {
        assert_eq!(FormStatus::Idle.message(), None);
    }

    #[test]
    fn receipts_and_failures_are_reported() {
        let sent = FormStatus::Sent(7).message().unwrap_or_default();
        assert!(sent.contains("#7"));
        let failed = FormStatus::Failed("email is required".into());
        assert_eq!(failed.message().as_deref(), Some("Could not send: email is required"));
        assert!(failed.class().contains("red"));
    }
}
