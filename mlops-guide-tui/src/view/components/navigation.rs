//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::view::theme::Styles;

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let is_focused = app.focus.is_navigation();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    let inner = block.inner(area);

    // 构建导航项列表
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, nav_item)| {
            let is_selected = i == app.navigation.selected;
            let is_current = nav_item.page == app.current_page;
            let prefix = if is_selected { "▶ " } else { "  " };

            let content = format!("{}{} {}", prefix, nav_item.icon, nav_item.label());

            let style = if is_selected {
                Styles::selected()
            } else if is_current {
                Styles::heading()
            } else {
                Styles::body()
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);

    // 每项一行，从列表顶部开始；超出面板的项不登记
    let offset = state.offset();
    let mut hits = app.hit_map.borrow_mut();
    for (row, index) in (offset..app.navigation.items.len()).enumerate() {
        let Ok(row) = u16::try_from(row) else {
            break;
        };
        if row >= inner.height {
            break;
        }
        hits.push(
            Rect::new(inner.x, inner.y + row, inner.width, 1),
            HitTarget::NavItem(index),
        );
    }
}
