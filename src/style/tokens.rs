// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by both styling backends.

pub mod palette {
    pub const WHITE: &str = "#FFFFFF";
    pub const GRAY_900: &str = "#1A1A1A";

    pub const ERROR_500: &str = "#E53935";
    pub const WARNING_500: &str = "#F1A620";
    pub const SUCCESS_500: &str = "#43B367";
    pub const INFO_500: &str = "#6496FF";
}

/// Spacing scale (4px grid).
pub mod spacing {
    pub const SM: f32 = 12.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
}

pub mod border {
    pub const WIDTH_MD: f32 = 2.0;
}
