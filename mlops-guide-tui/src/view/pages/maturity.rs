//! 成熟度模型页面
//!
//! 每个模型一组，组标题下面竖排该模型的各个阶段。
//! 单列布局，所以 ←→ 不移动光标。

use mlops_guide_core::content::maturity::{stage_excerpt, MODEL_IMAGE, TITLE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, HitTarget};
use crate::view::components::image;
use crate::view::components::tile_grid::{render_tile, TileView};
use crate::view::theme::Styles;

const TILE_HEIGHT: u16 = 5;

enum Entry<'a> {
    Group(&'a str),
    Stage(usize, TileView<'a>),
}

impl Entry<'_> {
    fn height(&self) -> u16 {
        match self {
            Entry::Group(_) => 1,
            Entry::Stage(..) => TILE_HEIGHT,
        }
    }
}

/// 渲染成熟度模型页面
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let header = vec![
        Line::styled(TITLE, Styles::heading()),
        image::caption(&MODEL_IMAGE, &app.assets_dir),
    ];
    frame.render_widget(Paragraph::new(header), layout[0]);

    let tiles = app.content.maturity_models.tiles();
    // 摘要在渲染时截取，覆盖文件里的阶段也一样
    let excerpts: Vec<String> = tiles.iter().map(|tile| stage_excerpt(tile.record)).collect();
    let mut entries = Vec::new();
    let mut current_group = None;
    for (index, (tile, excerpt)) in tiles.iter().zip(&excerpts).enumerate() {
        let group = tile.group.map(|key| key.as_str());
        if group != current_group {
            if let Some(name) = group {
                entries.push(Entry::Group(name));
            }
            current_group = group;
        }
        let view = TileView {
            summary: excerpt.as_str(),
            ..TileView::from_tile(tile)
        };
        entries.push(Entry::Stage(index, view.with_footer(t().pages.learn_more)));
    }

    render_entries(app, frame, layout[1], &entries);
}

fn render_entries(app: &App, frame: &mut Frame, area: Rect, entries: &[Entry<'_>]) {
    let cursor = app.maturity.cursor();
    let focused = app.focus.is_content();

    // 每项的起始行
    let mut tops = Vec::with_capacity(entries.len());
    let mut y = 0u16;
    for entry in entries {
        tops.push(y);
        y = y.saturating_add(entry.height());
    }

    // 让光标所在阶段完整可见
    let offset = entries
        .iter()
        .zip(&tops)
        .find(|(entry, _)| matches!(entry, Entry::Stage(i, _) if *i == cursor))
        .map_or(0, |(entry, top)| {
            (top + entry.height()).saturating_sub(area.height).min(*top)
        });

    let mut hits = app.hit_map.borrow_mut();
    hits.grid_columns = 1;

    for (entry, top) in entries.iter().zip(&tops) {
        if *top < offset {
            continue;
        }
        let row = top - offset;
        if row + entry.height() > area.height {
            break;
        }
        let rect = Rect::new(area.x, area.y + row, area.width, entry.height());
        match entry {
            Entry::Group(name) => {
                frame.render_widget(Paragraph::new(Line::styled(*name, Styles::title())), rect);
            }
            Entry::Stage(index, view) => {
                render_tile(frame, rect, view, focused && *index == cursor);
                hits.push(rect, HitTarget::Tile(*index));
            }
        }
    }
}
