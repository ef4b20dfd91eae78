//! Data models for the file-loader widget.
//!
//! This module contains shared data structure definitions used across the
//! application: attached file entries and widget settings.

pub mod file;
pub mod settings;
