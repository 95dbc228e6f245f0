//! AlgoLab - 经典算法面试题的个人练习集
//!
//! 题目来源包括《Cracking the Coding Interview》《Elements of
//! Programming Interviews》、LeetCode 和 Rosetta Code。每道题一个独立
//! 模块：模块文档给出题目描述，若干种实现对比不同的复杂度取舍，
//! 文件底部的 `demo()` 打印示例输入输出供人工检查。

pub mod arrays;
pub mod common;
pub mod config;
pub mod dp;
pub mod graphs;
pub mod math;
pub mod puzzles;
pub mod review;
pub mod runner;
pub mod sorting;
pub mod strings;
pub mod structures;
