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
pub fn ListingsPage() -> impl IntoView {
	let store = expect_context::<Store<AppData>>();

	view! {
		<h2>"Claimed Listings"</h2>
		{
			move || {
				let listings = store.claimed_listings().get();
				if listings.is_empty() {
					view! {
						<div class="listings_none">"No listings have been claimed."</div>
					}.into_any()
				} else {
					view! {
						<ul class="listing_list">
							{
								listings.into_iter().map(|listing| view! {
									<li>
										<a href={make_listing_url(&listing.id)}>
											{listing.name}
										</a>
									</li>
								}).collect_view()
							}
						</ul>
					}.into_any()
				}
			}
		}
	}
}
