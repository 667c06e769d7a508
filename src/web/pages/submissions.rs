// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::utils::make_listing_url;
use crate::model::{AppData, AppDataStoreFields};
use leptos::prelude::*;
use reactive_stores::Store;

#[component]
pub fn SubmissionsPage() -> impl IntoView {
	let store = expect_context::<Store<AppData>>();

	view! {
		<h2>"Extension Requests"</h2>
		<Show
			when=move || !store.submissions().read().is_empty()
			fallback=|| view! {
				<div class="submissions_none">"No extension requests have been submitted."</div>
			}
		>
			<ul class="submission_list">
				<For
					each=move || store.submissions().get()
					key=|submission| submission.id.clone()
					let(submission)
				>
					<li class="submission">
						<div class="submission_start">
							<a class="submission_listing" href={make_listing_url(&submission.listing.id)}>
								{submission.listing.name.clone()}
							</a>
							<span class="submission_time">
								{submission.submitted_at.map(|time| time.to_rfc3339()).unwrap_or_default()}
							</span>
						</div>
						<div class="submission_reason">
							{submission.reason.clone()}
						</div>
					</li>
				</For>
			</ul>
		</Show>
	}
}
