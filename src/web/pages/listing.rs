// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::field::AppField;
use super::utils::{ListingParams, ServerBackend};
use crate::extension::{
	AddressKind, AddressPart, FormField, ListingViewState, REASON_REQUIRED_MESSAGE, SubmitOutcome,
	submit_extension_request,
};
use crate::model::AppData;
use leptos::ev::SubmitEvent;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params};
use reactive_stores::Store;

#[component]
pub fn ListingPage() -> impl IntoView {
	let params = use_params::<ListingParams>();
	let store = expect_context::<Store<AppData>>();
	let navigate = use_navigate();

	move || {
		let listing_id = params.read().as_ref().ok().and_then(|params| params.id.clone());
		let navigate = navigate.clone();
		view! {
			<ListingView
				state=store
				listing_id
				navigate=move |path: &str| navigate(path, Default::default())
			/>
		}
	}
}

/// The extension request form for a single listing.
///
/// `state` is read once when the view is built; later changes to the listing don't reset what the user has typed.
#[component]
pub fn ListingView<N>(state: Store<AppData>, listing_id: Option<String>, navigate: N) -> impl IntoView
where
	N: Fn(&str) + Clone + Send + Sync + 'static,
{
	let form = match ListingViewState::load(&state, listing_id.as_deref()) {
		ListingViewState::NotFound => {
			return view! { <div class="listing_not_found">"Listing was not found!"</div> }.into_any();
		}
		ListingViewState::Editing(form) => form,
	};

	let heading = format!("Request An Extension For {}", form.listing.name);
	let form = RwSignal::new(form);

	let form_submit = move |event: SubmitEvent| {
		event.prevent_default();

		let current_form = form.get_untracked();
		let navigate = navigate.clone();
		spawn_local(async move {
			let outcome = submit_extension_request(&current_form, &ServerBackend, &state, &navigate).await;
			if let SubmitOutcome::ReasonRequired = outcome {
				alert_user(REASON_REQUIRED_MESSAGE);
			}
		});
	};

	view! {
		<div class="listing_page">
			<h2 class="listing_heading">{heading}</h2>
			<form class="listing_form" on:submit=form_submit>
				<AppField form field=FormField::Name label="Name" />
				{
					AddressKind::ALL
						.into_iter()
						.map(|kind| view! {
							<div class="listing_address">
								<h3>{kind.heading()}</h3>
								<div class="listing_address_fields">
									{
										AddressPart::ALL
											.into_iter()
											.map(|part| view! {
												<AppField
													form
													field=FormField::Address(kind, part)
													label=part.label()
												/>
											})
											.collect_view()
									}
								</div>
							</div>
						})
						.collect_view()
				}
				<div class="listing_reason">
					<h3>"Reason for filing"</h3>
					<AppField form field=FormField::Reason label="Reason for filing extension" />
				</div>
				<button type="submit">"Submit Request"</button>
			</form>
		</div>
	}
	.into_any()
}

fn alert_user(message: &str) {
	if let Err(alert_error) = window().alert_with_message(message) {
		error!("Failed to show alert: {:?}", alert_error);
	}
}
