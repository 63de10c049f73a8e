// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod home;

pub use health::{HEALTH_BODY, HEALTH_PREFIX, health_check};
pub use home::{HOME_BODY, home};
