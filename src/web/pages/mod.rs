// © 2024-2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod app;
mod errors;
mod field;
mod header;
mod listing;
mod listings;
#[cfg(feature = "ssr")]
pub mod shell;
mod submissions;
mod utils;
