//! 图片说明
//!
//! 终端里不画位图，只显示替代文本和解析后的文件路径。

use std::path::Path;

use mlops_guide_core::content::ImageRef;
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

use crate::i18n::t;
use crate::view::theme::Styles;

/// "[Image] alt (path)"
pub fn caption(image: &ImageRef, assets_dir: &Path) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("[{}] ", t().common.image), Styles::muted()),
        Span::styled(image.alt, Styles::body().add_modifier(Modifier::ITALIC)),
        Span::styled(
            format!(" ({})", image.resolve(assets_dir).display()),
            Styles::muted(),
        ),
    ])
}
