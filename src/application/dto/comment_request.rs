// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct CommentRequestDto {
    #[validate(length(min = 20, max = 1000, message = "Comment must be 20-1000 characters"))]
    pub text: String,
}
