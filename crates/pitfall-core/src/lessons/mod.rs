// SPDX-License-Identifier: Apache-2.0

//! Contrast material for the injection and XSS lessons.
//!
//! Only the safe counterparts are executable code. The vulnerable variants
//! the lessons contrast against live in doc comments, where they can be read
//! but never called.

pub mod injection;
pub mod xss;
