// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::extension::{ExtensionForm, FormField};
use leptos::prelude::*;

/// A labeled text input bound to one field of the extension form.
#[component]
pub fn AppField(form: RwSignal<ExtensionForm>, field: FormField, label: &'static str) -> impl IntoView {
	let path = field.path();

	view! {
		<label class="app_field">
			<span class="app_field_label">{label}</span>
			<input
				type="text"
				class="app_field_input"
				id=path.clone()
				name=path
				value=move || form.with(|form| field.get(form).to_string())
				on:input=move |event| {
					let value = event_target_value(&event);
					form.update(|form| field.set(form, value));
				}
			/>
		</label>
	}
}
