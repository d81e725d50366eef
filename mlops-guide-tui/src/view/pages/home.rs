//! 首页视图

use mlops_guide_core::content::home::{
    HISTORY_CARDS, HISTORY_INTRO, LIFECYCLE_IMAGE, LOGOS, PRINCIPLES_INTRO, TITLE, WHAT_IS_MLOPS,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::components::image;
use crate::view::components::tile_grid::{self, GridSpec, TileView};
use crate::view::theme::Styles;

const GRID: GridSpec = GridSpec {
    min_width: 28,
    max_columns: 3,
    tile_height: 4,
};

/// 历史卡片的高度（含边框）
const CARD_HEIGHT: u16 = 7;

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = &t().pages;

    // 首页布局：介绍 + 历史卡片 + 原则磁贴
    let grid_rows = u16::try_from(
        app.content
            .principles
            .tiles()
            .len()
            .div_ceil(tile_grid::columns_for(area.width, GRID)),
    )
    .unwrap_or(1);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(4),                               // 介绍
            Constraint::Length(CARD_HEIGHT + 1),              // 历史卡片
            Constraint::Length(2),                            // 原则介绍
            Constraint::Length(grid_rows * GRID.tile_height), // 原则磁贴
        ])
        .split(area);

    // 介绍
    let mut intro = vec![
        Line::styled(TITLE, Styles::title()),
        Line::from(""),
        Line::styled(texts.what_is_mlops, Styles::heading()),
        Line::styled(WHAT_IS_MLOPS, Styles::body()),
        image::caption(&LIFECYCLE_IMAGE, &app.assets_dir),
    ];
    intro.extend(LOGOS.iter().map(|logo| image::caption(logo, &app.assets_dir)));
    intro.push(Line::from(""));
    intro.push(Line::styled(texts.history, Styles::heading()));
    intro.push(Line::styled(HISTORY_INTRO, Styles::body()));
    frame.render_widget(Paragraph::new(intro).wrap(Wrap { trim: true }), layout[0]);

    // 历史卡片，三列并排
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(Rect {
            height: CARD_HEIGHT,
            ..layout[1]
        });
    for ((title, text), rect) in HISTORY_CARDS.iter().zip(cards.iter()) {
        let card = Paragraph::new(*text)
            .style(Styles::body())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {title} "))
                    .title_style(Styles::heading())
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Styles::border(false)),
            );
        frame.render_widget(card, *rect);
    }

    // 原则
    let principles_intro = vec![
        Line::styled(texts.principles, Styles::heading()),
        Line::styled(PRINCIPLES_INTRO, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(principles_intro), layout[2]);

    let tiles = app.content.principles.tiles();
    let views: Vec<TileView> = tiles
        .iter()
        .map(|tile| TileView::from_tile(tile).with_footer(texts.learn_more))
        .collect();
    tile_grid::render(app, frame, layout[3], &views, app.principles.cursor(), GRID);
}
