// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库实体模块
///
/// 定义数据库表对应的实体结构
/// 使用SeaORM框架进行对象关系映射
/// 外键均声明为级联删除，删除播客时数据库会同步删除其剧集、评论与订阅
pub mod comment;
pub mod episode;
pub mod podcast;
pub mod subscription;
pub mod user;
