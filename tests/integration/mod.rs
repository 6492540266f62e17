// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod account_test;
pub mod catalog_test;
pub mod comment_test;
pub mod helpers;
pub mod subscription_test;
