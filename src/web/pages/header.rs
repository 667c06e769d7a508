// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::extension::SUBMISSIONS_PATH;
use leptos::prelude::*;

#[component]
pub fn PageHeader() -> impl IntoView {
	view! {
		<header id="header">
			<h1 id="header_title">"Listing Extensions"</h1>
			<nav id="header_nav">
				<a href="/">"Listings"</a>
				<a href=SUBMISSIONS_PATH>"Submissions"</a>
			</nav>
		</header>
	}
}
