// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 该模块定义了系统的核心业务实体，包括：
/// - 播客（podcast）：目录条目、剧集以及对应的更新补丁
/// - 评论（comment）：听众对播客的评论
/// - 用户（user）：账户信息与订阅集合
///
/// 实体之间只通过外键ID互相引用，不持有彼此的对象图。
/// 每种实体都有一个 `New*` 草稿类型，表示尚未持久化、还没有ID的状态。
pub mod comment;
pub mod podcast;
pub mod user;
