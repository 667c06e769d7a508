// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::extension::ExtensionBackend;
use crate::model::{AppData, Submission};
use leptos::prelude::*;
use leptos_router::params::Params;
use std::future::Future;

#[derive(Clone, Debug, Params, PartialEq)]
pub struct ListingParams {
	pub id: Option<String>,
}

/// Makes a URL to the extension request page for a listing
pub fn make_listing_url(listing_id: &str) -> String {
	format!("/listing/{}", listing_id)
}

/// Sends extension requests through the [request_extension] server function.
#[derive(Clone, Copy, Debug, Default)]
pub struct ServerBackend;

impl ExtensionBackend for ServerBackend {
	fn request_extension(&self, submission: Submission) -> impl Future<Output = Result<Submission, ServerFnError>> {
		request_extension(submission)
	}
}

#[server]
pub async fn get_app_data() -> Result<AppData, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	Ok(state.ledger.snapshot().await)
}

#[server]
pub async fn request_extension(submission: Submission) -> Result<Submission, ServerFnError> {
	use crate::web::state::AppState;

	let state: AppState = expect_context();
	match state.ledger.record(submission).await {
		Ok(submission) => Ok(submission),
		Err(error) => {
			tracing::warn!(source = ?error, "Rejected extension request");
			Err(ServerFnError::ServerError(error.to_string()))
		}
	}
}
