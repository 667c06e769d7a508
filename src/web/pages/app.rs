// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::errors::error::Error;
use super::errors::not_found::NotFound;
use super::header::PageHeader;
use super::listing::ListingPage;
use super::listings::ListingsPage;
use super::submissions::SubmissionsPage;
use super::utils::get_app_data;
use leptos::logging::error;
use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ParentRoute, Route, Router, Routes};
use leptos_router::nested_router::Outlet;
use leptos_router::path;
use reactive_stores::Store;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	view! {
		<Stylesheet href="/pkg/listing-extensions.css" />
		<Title text="Listing Extensions" />

		<Router>
			<Routes fallback=NotFound>
				<ParentRoute path=path!("") view=MainPage>
					<Route path=path!("/") view=ListingsPage />
					<Route path=path!("/listing/:id") view=ListingPage />
					<Route path=path!("/submissions") view=SubmissionsPage />
				</ParentRoute>
			</Routes>
		</Router>
	}
}

/// Loads the shared application state once and makes it available to every page below it.
#[component]
fn MainPage() -> impl IntoView {
	view! {
		<Await future=get_app_data() let:data>
			{
				match data {
					Ok(data) => {
						provide_context(Store::new(data.clone()));
						view! {
							<PageHeader />
							<main>
								<Outlet />
							</main>
						}.into_any()
					}
					Err(load_error) => {
						error!("Failed to load application data: {}", load_error);
						view! {
							<Error />
						}.into_any()
					}
				}
			}
		</Await>
	}
}
