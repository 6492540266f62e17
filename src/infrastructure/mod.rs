// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 数据库（database）：提供数据库连接和实体映射
/// - 仓库实现（repositories）：提供领域仓库接口的 SeaORM 实现与内存实现
///
/// 基础设施层依赖于领域层的抽象接口。
pub mod database;
pub mod repositories;
