//! UI module - widgets shared by the converter view

pub mod components;
