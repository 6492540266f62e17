// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含统一的结果信封与组装各领域服务的应用上下文
pub mod context;
pub mod dto;
