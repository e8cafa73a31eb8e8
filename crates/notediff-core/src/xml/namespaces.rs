#![allow(non_snake_case)]

pub mod W {
    pub const NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
}

pub mod MC {
    pub const NS: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";
}
