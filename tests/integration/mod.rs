// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod articles_api_test;
pub mod categories_api_test;
pub mod helpers;
pub mod repositories_test;
pub mod search_api_test;
